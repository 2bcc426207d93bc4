//! Recover reading order from a saddle-stitched document
//!
//! Each imposed page holds two linear pages side by side. Running the
//! signature rule forward over the linear page count reproduces the order
//! the pages were laid down in; indexing that order by linear page number
//! inverts it.

use super::saddle_stitch::signature_spreads;
use super::{Half, LinearPage, LinearPageOrder, PageIndex};
use crate::types::{ImposeError, Result};

/// Linear pages carried by each imposed page
const PAGES_PER_IMPOSED_PAGE: usize = 2;

/// Check an imposed page count and return the linear page count it unfolds to
pub fn linear_page_count(imposed_pages: usize) -> Result<usize> {
    if imposed_pages == 0 {
        return Err(ImposeError::EmptyDocument);
    }
    if imposed_pages % 2 != 0 {
        return Err(ImposeError::MalformedImposition(format!(
            "{} imposed pages cannot form whole sheets (front and back)",
            imposed_pages
        )));
    }

    let linear = imposed_pages * PAGES_PER_IMPOSED_PAGE;
    if linear % 4 != 0 {
        return Err(ImposeError::MalformedImposition(format!(
            "{} linear pages is not a multiple of 4",
            linear
        )));
    }
    Ok(linear)
}

/// Check that an imposed page is a landscape spread
pub fn check_spread_size(width: f32, height: f32) -> Result<()> {
    if width > height {
        Ok(())
    } else {
        Err(ImposeError::MalformedImposition(format!(
            "imposed pages must be landscape spreads, got {} x {} pt",
            width, height
        )))
    }
}

/// Map every linear page back to the imposed page and half holding it
pub fn resolve_linear_order(imposed_pages: usize) -> Result<LinearPageOrder> {
    let linear = linear_page_count(imposed_pages)?;

    // Linear page numbers in the order they were laid down on imposed pages
    let imposed_order: Vec<usize> = signature_spreads(linear)
        .iter()
        .flat_map(|spread| spread.in_print_order())
        .collect();

    let mut sources: Vec<Option<(PageIndex, Half)>> = vec![None; linear];
    for (position, pair) in imposed_order.chunks(PAGES_PER_IMPOSED_PAGE).enumerate() {
        let imposed_page = PageIndex::from_position(position)?;
        for (number, half) in pair.iter().zip([Half::Left, Half::Right]) {
            sources[number - 1] = Some((imposed_page, half));
        }
    }

    let pages = sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| {
            let (imposed_page, half) = source.ok_or_else(|| {
                ImposeError::MalformedImposition(format!("linear page {} has no source", index + 1))
            })?;
            Ok(LinearPage {
                linear_page: index + 1,
                imposed_page,
                half,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LinearPageOrder {
        pages,
        imposed_pages,
    })
}
