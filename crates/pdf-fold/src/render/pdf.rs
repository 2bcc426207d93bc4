//! lopdf-backed source reader and sheet writer

use super::xobject::{create_page_xobject, get_page_dimensions, get_page_origin};
use super::{Placement, SheetRenderer, guide_ops};
use crate::layout::{GuideLine, PageIndex, Rect};
use crate::types::{ImposeError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// A parsed source document
#[derive(Debug)]
pub struct PdfSource {
    document: Document,
    page_ids: Vec<ObjectId>,
}

impl PdfSource {
    /// Parse a PDF from memory
    pub fn load(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes).map_err(|e| ImposeError::Load(e.to_string()))?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        let page_ids = document.get_pages().into_values().collect();
        Self { document, page_ids }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    pub fn page_id(&self, page: PageIndex) -> Result<ObjectId> {
        self.page_ids
            .get(page.zero_based())
            .copied()
            .ok_or(ImposeError::PageNotFound(page.get()))
    }

    /// Page size (width, height) in points
    pub fn page_size(&self, page: PageIndex) -> Result<(f32, f32)> {
        get_page_dimensions(&self.document, self.page_id(page)?)
    }

    /// Sizes of every page in document order
    pub fn page_sizes(&self) -> Result<Vec<(f32, f32)>> {
        self.page_ids
            .iter()
            .map(|&id| get_page_dimensions(&self.document, id))
            .collect()
    }
}

/// Output page being composed
struct OpenSide {
    width: f32,
    height: f32,
    ops: String,
    xobjects: Dictionary,
}

/// Writes composed sheet sides into a new PDF.
///
/// Each source page is embedded once as a Form XObject and referenced from
/// every side that shows it.
pub struct PdfWriter<'a> {
    source: &'a PdfSource,
    output: Document,
    pages_id: ObjectId,
    page_refs: Vec<Object>,
    resource_cache: HashMap<ObjectId, ObjectId>,
    embedded: HashMap<PageIndex, ObjectId>,
    side: Option<OpenSide>,
}

impl<'a> PdfWriter<'a> {
    pub fn new(source: &'a PdfSource) -> Self {
        let mut output = Document::with_version("1.7");
        let pages_id = output.new_object_id();
        Self {
            source,
            output,
            pages_id,
            page_refs: Vec::new(),
            resource_cache: HashMap::new(),
            embedded: HashMap::new(),
            side: None,
        }
    }

    /// Number of finished output pages
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    fn embed(&mut self, page: PageIndex) -> Result<ObjectId> {
        if let Some(&id) = self.embedded.get(&page) {
            return Ok(id);
        }
        let page_id = self.source.page_id(page)?;
        let id = create_page_xobject(
            &mut self.output,
            self.source.document(),
            page_id,
            &mut self.resource_cache,
        )?;
        self.embedded.insert(page, id);
        Ok(id)
    }

    fn open_side(&mut self) -> Result<&mut OpenSide> {
        self.side
            .as_mut()
            .ok_or_else(|| ImposeError::Render("no output side has been started".to_string()))
    }

    /// Close any open side and build the page tree and catalog
    pub fn finish(mut self) -> Result<Document> {
        if self.side.is_some() {
            self.finish_side()?;
        }

        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        Ok(self.output)
    }

    /// Finish and serialize the output document
    pub fn save(self) -> Result<Vec<u8>> {
        let mut document = self.finish()?;
        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

impl SheetRenderer for PdfWriter<'_> {
    fn begin_side(&mut self, width_pt: f32, height_pt: f32) -> Result<()> {
        if self.side.is_some() {
            self.finish_side()?;
        }
        self.side = Some(OpenSide {
            width: width_pt,
            height: height_pt,
            ops: String::new(),
            xobjects: Dictionary::new(),
        });
        Ok(())
    }

    fn draw_page(&mut self, placement: &Placement) -> Result<()> {
        let xobject_id = self.embed(placement.page)?;
        let page_id = self.source.page_id(placement.page)?;
        let (box_x, box_y) = get_page_origin(self.source.document(), page_id);

        let side = self.open_side()?;
        let name = format!("P{}", placement.page.get());
        side.xobjects.set(name.as_bytes(), Object::Reference(xobject_id));

        let s = placement.scale;
        let (x, y) = placement.origin;
        // Shift so the page's MediaBox corner, not (0, 0), lands on the origin
        let (a, tx, ty) = if placement.rotation.is_rotated() {
            (-s, x + s * box_x, y + s * box_y)
        } else {
            (s, x - s * box_x, y - s * box_y)
        };

        side.ops.push_str("q ");
        if let Some(clip) = placement.clip {
            side.ops.push_str(&format!(
                "{} {} {} {} re W n ",
                clip.x, clip.y, clip.width, clip.height
            ));
        }
        side.ops
            .push_str(&format!("{} 0 0 {} {} {} cm /{} Do Q\n", a, a, tx, ty, name));
        Ok(())
    }

    fn draw_guides(&mut self, lines: &[GuideLine], area: &Rect) -> Result<()> {
        let ops = guide_ops(lines, area);
        self.open_side()?.ops.push_str(&ops);
        Ok(())
    }

    fn finish_side(&mut self) -> Result<()> {
        let side = self
            .side
            .take()
            .ok_or_else(|| ImposeError::Render("no output side to finish".to_string()))?;

        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), side.ops.into_bytes()));

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(side.xobjects));

        let page_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(side.width),
                    Object::Real(side.height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }
}
