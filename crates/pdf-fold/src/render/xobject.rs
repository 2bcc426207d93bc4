//! XObject creation for imposition
//!
//! Source pages become Form XObjects in the output document, which are then
//! placed onto output pages with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject from a source page.
///
/// Resources are deep-copied through `cache`, so objects shared between
/// source pages are copied once.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let media_box = page_media_box(source, page_id)
        .map(|(x0, y0, x1, y1)| {
            vec![
                Object::Real(x0),
                Object::Real(y0),
                Object::Real(x1),
                Object::Real(y1),
            ]
        })
        .unwrap_or_else(default_media_box);

    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// Get default MediaBox for US Letter size
fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.0),
        Object::Real(DEFAULT_PAGE_DIMENSIONS.1),
    ]
}

/// Look up a page attribute, walking up the page tree for inheritable keys
fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut current = doc.get_dictionary(page_id).ok()?;
    // Page trees are shallow; the bound guards against reference cycles
    for _ in 0..32 {
        if let Ok(value) = current.get(key) {
            return match value {
                Object::Reference(id) => doc.get_object(*id).ok().cloned(),
                other => Some(other.clone()),
            };
        }
        let parent = current.get(b"Parent").and_then(Object::as_reference).ok()?;
        current = doc.get_dictionary(parent).ok()?;
    }
    None
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => get_single_content_stream(doc, *id),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Get content from a single content stream reference
fn get_single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    match doc.get_object(id)? {
        Object::Stream(stream) => Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone())),
        // Contents may point at an array of streams
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                let content = stream
                    .decompressed_content()
                    .unwrap_or_else(|_| stream.content.clone());
                result.extend_from_slice(&content);
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the id first so self-referencing objects terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                // Back-links into the source page tree would drag it along
                if key.as_slice() == b"Parent" {
                    continue;
                }
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// MediaBox corners (x0, y0, x1, y1), following inheritance
fn page_media_box(doc: &Document, page_id: ObjectId) -> Option<(f32, f32, f32, f32)> {
    let media_box = inherited_attribute(doc, page_id, b"MediaBox")?;
    let values: Vec<f32> = media_box
        .as_array()
        .ok()?
        .iter()
        .filter_map(extract_number)
        .collect();

    match values.as_slice() {
        [x0, y0, x1, y1] => Some((*x0, *y0, *x1, *y1)),
        _ => None,
    }
}

/// Get source page dimensions (width, height) in points.
///
/// Pages without a usable MediaBox are treated as US Letter.
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    doc.get_dictionary(page_id)?;

    match page_media_box(doc, page_id) {
        Some((x0, y0, x1, y1)) => Ok(((x1 - x0).abs(), (y1 - y0).abs())),
        None => {
            log::warn!(
                "Page {:?} has no usable MediaBox, assuming US Letter",
                page_id
            );
            Ok(DEFAULT_PAGE_DIMENSIONS)
        }
    }
}

/// Lower-left corner of the page's MediaBox, `(0, 0)` when unknown
pub fn get_page_origin(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    page_media_box(doc, page_id).map_or((0.0, 0.0), |(x0, y0, x1, y1)| (x0.min(x1), y0.min(y1)))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
