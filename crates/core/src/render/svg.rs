//! SVG/HTML adapter over segment renderings.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use svg::Document;
use svg::node::element::{Image, Line};

use crate::artwork::{IconBox, place_icons};
use crate::error::MazeError;
use crate::gallery::{Gallery, GalleryConfig, GalleryEntry};

/// Everything except path separators and the usual file-name punctuation.
const HREF_ENCODE: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'/').remove(b'-').remove(b'_').remove(b'.');

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One `<svg>` picture: wall lines drawn inside the bordered area plus the
/// two icons beside the openings.
pub fn render_svg(entry: &GalleryEntry, config: &GalleryConfig) -> Result<Document, MazeError> {
    let rendering = entry.maze.render(config.maze_rect())?;
    let (left_icon, right_icon) = place_icons(&rendering, config.hborder);

    let mut document = Document::new()
        .set("xmlns", SVG_NS)
        .set("width", config.picture_width())
        .set("height", config.picture_height());
    for segment in &rendering.segments {
        document = document.add(
            Line::new()
                .set("x1", segment.x1)
                .set("y1", segment.y1)
                .set("x2", segment.x2)
                .set("y2", segment.y2)
                .set("class", "wall"),
        );
    }
    Ok(document
        .add(icon_image(&config.icon_dir, entry.artwork.left, left_icon))
        .add(icon_image(&config.icon_dir, entry.artwork.right, right_icon)))
}

fn icon_image(icon_dir: &str, name: &str, icon: IconBox) -> Image {
    Image::new()
        .set("x", icon.x)
        .set("y", icon.y)
        .set("width", icon.size)
        .set("height", icon.size)
        .set("href", icon_href(icon_dir, name))
}

fn icon_href(icon_dir: &str, name: &str) -> String {
    let path = format!("{icon_dir}/{name}.svg");
    utf8_percent_encode(&path, HREF_ENCODE).to_string()
}

/// A standalone page with every picture of the gallery inside `#mazes`.
pub fn render_gallery_html(gallery: &Gallery) -> Result<String, MazeError> {
    let pictures = gallery
        .entries
        .iter()
        .map(|entry| render_svg(entry, &gallery.config).map(|document| document.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Mazes</title>\n\
         <style>line.wall {{ stroke: black; stroke-width: 3; stroke-linecap: square; }}</style>\n\
         </head>\n<body>\n<div id=\"mazes\">\n{}\n</div>\n</body>\n</html>\n",
        pictures.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_cell_gallery(icon_dir: &str) -> Gallery {
        let config = GalleryConfig {
            height: 1,
            width: 1,
            count: 1,
            icon_dir: icon_dir.to_string(),
            ..GalleryConfig::default()
        };
        Gallery::generate(&config, 7).expect("valid config")
    }

    #[test]
    fn svg_holds_one_line_per_segment_and_two_images() {
        let gallery = single_cell_gallery("img");
        let entry = &gallery.entries[0];
        let svg = render_svg(entry, &gallery.config).expect("valid layout").to_string();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
        assert!(svg.contains(r#"width="600""#));
        assert!(svg.contains(r#"height="480""#));
        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches(r#"class="wall""#).count(), 2);
        assert!(svg.contains(r#"x2="510""#));
        assert_eq!(svg.matches("<image").count(), 2);
        assert!(svg.contains(&format!(r#"href="img/{}.svg""#, entry.artwork.left)));
        assert!(svg.contains(&format!(r#"href="img/{}.svg""#, entry.artwork.right)));
        assert!(svg.contains(r#"y="195""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn icon_dir_markup_characters_are_encoded_in_href() {
        let gallery = single_cell_gallery("R&D \"art\" <x>");
        let entry = &gallery.entries[0];
        let svg = render_svg(entry, &gallery.config).expect("valid layout").to_string();

        assert!(!svg.contains("R&D"));
        assert!(!svg.contains("<x>"));
        assert!(svg.contains(&format!(
            r#"href="R%26D%20%22art%22%20%3Cx%3E/{}.svg""#,
            entry.artwork.left
        )));
        assert_eq!(svg.matches("<image").count(), 2);
    }

    #[test]
    fn plain_icon_paths_pass_through_unchanged() {
        assert_eq!(icon_href("assets/icons-v2", "leaves2"), "assets/icons-v2/leaves2.svg");
    }

    #[test]
    fn gallery_page_wraps_every_picture() {
        let config = GalleryConfig { count: 3, ..GalleryConfig::default() };
        let gallery = Gallery::generate(&config, 11).expect("valid config");
        let html = render_gallery_html(&gallery).expect("valid layout");
        assert_eq!(html.matches("<svg").count(), 3);
        assert!(html.contains(r#"<div id="mazes">"#));
    }
}
