//! Size checks for figures exported as PDF

use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, instrument, trace};

use crate::constants::POINTS_PER_INCH;
use crate::error::{FormatterError, Result};
use crate::formatter::FigureSize;

/// Guard against reference cycles in malformed page trees
const MAX_PARENT_DEPTH: usize = 32;

/// Extension trait for lopdf::Document to read back figure dimensions
pub trait FigureInspect {
    /// Size of the first page in inches, taken from its MediaBox
    fn figure_size(&self) -> Result<FigureSize>;

    /// Whether the first page has the expected size, within `tolerance` inches
    fn matches_figure(&self, expected: &FigureSize, tolerance: f64) -> Result<bool> {
        let actual = self.figure_size()?;
        let matches = actual.approx_eq(expected, tolerance);
        debug!("Figure PDF is {}, expected {}", actual, expected);
        Ok(matches)
    }
}

impl FigureInspect for Document {
    #[instrument(skip(self))]
    fn figure_size(&self) -> Result<FigureSize> {
        let page_id = self
            .get_pages()
            .into_values()
            .next()
            .ok_or(FormatterError::NoPages)?;

        let media_box = find_media_box(self, page_id)?;
        let (width, height) = media_box_dimensions(media_box)?;
        trace!("MediaBox of page {:?}: {} x {} pt", page_id, width, height);

        Ok(FigureSize::new(
            width / POINTS_PER_INCH,
            height / POINTS_PER_INCH,
        ))
    }
}

/// MediaBox of a page, inherited from its ancestors if the page has none
fn find_media_box(doc: &Document, page_id: ObjectId) -> Result<&Vec<Object>> {
    let mut node: &Dictionary = doc.get_object(page_id)?.as_dict()?;

    for _ in 0..MAX_PARENT_DEPTH {
        if let Ok(media_box) = node.get(b"MediaBox") {
            return Ok(resolve(doc, media_box)?.as_array()?);
        }
        let parent = node
            .get(b"Parent")
            .and_then(Object::as_reference)
            .map_err(|_| FormatterError::MissingMediaBox)?;
        node = doc.get_object(parent)?.as_dict()?;
    }

    Err(FormatterError::MissingMediaBox)
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> Result<&'a Object> {
    match object {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

/// Width and height in points of a `[llx lly urx ury]` rectangle
fn media_box_dimensions(media_box: &[Object]) -> Result<(f64, f64)> {
    let [llx, lly, urx, ury] = media_box else {
        return Err(FormatterError::MissingMediaBox);
    };

    let coordinate = |object: &Object| -> Result<f64> {
        object
            .as_float()
            .map(f64::from)
            .map_err(|_| FormatterError::MissingMediaBox)
    };

    let width = (coordinate(urx)? - coordinate(llx)?).abs();
    let height = (coordinate(ury)? - coordinate(lly)?).abs();
    if width == 0.0 || height == 0.0 {
        return Err(FormatterError::MissingMediaBox);
    }
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    /// One page document; the MediaBox sits on the page or on the page tree
    fn figure_document(media_box: Vec<Object>, on_page: bool) -> Document {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        };
        let mut pages = dictionary! {
            "Type" => "Pages",
            "Count" => 1,
        };
        if on_page {
            page.set("MediaBox", media_box);
        } else {
            pages.set("MediaBox", media_box);
        }

        let page_id = doc.add_object(page);
        pages.set("Kids", vec![Object::Reference(page_id)]);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_figure_size_from_page_media_box() {
        let doc = figure_document(
            vec![0.into(), 0.into(), Object::Real(246.24), Object::Real(152.0)],
            true,
        );
        let size = doc.figure_size().unwrap();
        assert!((size.width - 3.42).abs() < 1e-4);
        assert!((size.height - 152.0 / 72.0).abs() < 1e-4);
    }

    #[test]
    fn test_figure_size_inherited_media_box() {
        let doc = figure_document(vec![0.into(), 0.into(), 144.into(), 72.into()], false);
        let size = doc.figure_size().unwrap();
        assert_eq!(size, FigureSize::new(2.0, 1.0));
    }

    #[test]
    fn test_matches_figure() {
        let doc = figure_document(vec![0.into(), 0.into(), 144.into(), 72.into()], true);
        assert!(doc.matches_figure(&FigureSize::new(2.0, 1.0), 1e-3).unwrap());
        assert!(!doc.matches_figure(&FigureSize::new(2.0, 1.5), 1e-3).unwrap());
    }

    #[test]
    fn test_empty_document_has_no_pages() {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(vec![]),
            "Count" => 0,
        });
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        assert!(matches!(doc.figure_size(), Err(FormatterError::NoPages)));
    }

    #[test]
    fn test_malformed_media_box() {
        let doc = figure_document(vec![0.into(), 0.into(), 144.into()], true);
        assert!(matches!(
            doc.figure_size(),
            Err(FormatterError::MissingMediaBox)
        ));

        let doc = figure_document(vec![0.into(), 0.into(), 0.into(), 72.into()], true);
        assert!(matches!(
            doc.figure_size(),
            Err(FormatterError::MissingMediaBox)
        ));
    }
}
