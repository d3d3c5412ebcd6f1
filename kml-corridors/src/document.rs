//! Reading and writing the flight-track KML document.
//!
//! Everything here is pass-through plus append: the original styles
//! and features are preserved byte-for-byte in structure, and the
//! engine's corridor lines and markers are added at the end of the
//! Document element.

use corridor::{Coord, ReferencePoint, Run, Segment};
use kml::{
    types::{Element, Geometry, LineString, LineStyle, Placemark, Style},
    Kml, KmlReader, KmlWriter,
};
use std::{
    fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Kml(#[from] kml::Error),

    #[error("no Document element in {0}")]
    NoDocument(PathBuf),
}

const LEFT_STYLE: &str = "leftCorridorStyle";
const RIGHT_STYLE: &str = "rightCorridorStyle";
const MARKER_STYLE: &str = "distanceMarkerStyle";

/// Corridor lines are green, markers red (KML aabbggrr).
const CORRIDOR_COLOR: &str = "ff00ff00";
const MARKER_COLOR: &str = "ff0000ff";

/// A parsed flight-track document plus whatever gets appended to it.
pub struct FlightDocument {
    kml: Kml<f64>,
}

impl FlightDocument {
    /// Parse the document at `path`. A structurally unreadable
    /// document is the only fatal condition in the whole tool.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let mut kml = KmlReader::<_, f64>::from_path(path)?.read()?;
        if document_elements(&mut kml).is_none() {
            return Err(DocumentError::NoDocument(path.to_path_buf()));
        }
        Ok(Self { kml })
    }

    /// All LineString features in document order, as engine segments.
    ///
    /// Three-coordinate lines are the turning-point glyphs these
    /// documents draw, not track legs, and are skipped here the same
    /// way dashed connectors are skipped by the classifier later.
    pub fn line_segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        for (index, placemark) in placemarks(&self.kml).into_iter().enumerate() {
            let Some(Geometry::LineString(line)) = &placemark.geometry else {
                continue;
            };
            let coords: Vec<Coord> = line.coords.iter().map(to_coord).collect();
            if coords.len() == 3 {
                continue;
            }
            let name = placemark
                .name
                .clone()
                .unwrap_or_else(|| format!("Unnamed_{index}"));
            segments.push(Segment::new(index, name, coords));
        }
        segments
    }

    /// All named Point features, the SP/TP resolution candidates.
    pub fn reference_points(&self) -> Vec<ReferencePoint> {
        placemarks(&self.kml)
            .into_iter()
            .filter_map(|placemark| {
                let Some(Geometry::Point(point)) = &placemark.geometry else {
                    return None;
                };
                let name = placemark.name.clone()?;
                Some(ReferencePoint::new(name, to_coord(&point.coord)))
            })
            .collect()
    }

    /// Append the corridor boundary lines, the distance markers, and
    /// their styles. No-op when the run produced no corridor.
    pub fn append_overlays(&mut self, run: &Run, corridor_distance_m: f64) {
        let Some(corridor) = &run.corridor else {
            return;
        };
        // load() verified the Document element exists.
        let Some(elements) = document_elements(&mut self.kml) else {
            return;
        };

        elements.push(line_style(LEFT_STYLE, CORRIDOR_COLOR, 2.0));
        elements.push(line_style(RIGHT_STYLE, CORRIDOR_COLOR, 2.0));
        elements.push(line_style(MARKER_STYLE, MARKER_COLOR, 4.0));

        elements.push(line_placemark(
            &format!("Left Corridor ({corridor_distance_m}m)"),
            LEFT_STYLE,
            &corridor.left,
        ));
        elements.push(line_placemark(
            &format!("Right Corridor ({corridor_distance_m}m)"),
            RIGHT_STYLE,
            &corridor.right,
        ));
        for marker in &run.markers {
            elements.push(line_placemark(
                &marker.name,
                MARKER_STYLE,
                &[marker.left, marker.right],
            ));
        }
    }

    /// Serialize back out to `path`, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = File::create(path)?;
        file.write_all(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        KmlWriter::<_, f64>::from_writer(&mut file).write(&self.kml)?;
        Ok(())
    }
}

/// Depth-first placemark collection, preserving document order.
fn placemarks(kml: &Kml<f64>) -> Vec<&Placemark<f64>> {
    match kml {
        Kml::KmlDocument(document) => document.elements.iter().flat_map(placemarks).collect(),
        Kml::Document { elements, .. } | Kml::Folder { elements, .. } => {
            elements.iter().flat_map(placemarks).collect()
        }
        Kml::Placemark(placemark) => vec![placemark],
        _ => Vec::new(),
    }
}

/// The element list of the Document, where appended features land.
fn document_elements(kml: &mut Kml<f64>) -> Option<&mut Vec<Kml<f64>>> {
    match kml {
        Kml::KmlDocument(document) => {
            document
                .elements
                .iter_mut()
                .find_map(|element| match element {
                    Kml::Document { elements, .. } => Some(elements),
                    _ => None,
                })
        }
        Kml::Document { elements, .. } => Some(elements),
        _ => None,
    }
}

fn to_coord(coord: &kml::types::Coord<f64>) -> Coord {
    Coord::new(coord.x, coord.y, coord.z.unwrap_or(0.0))
}

fn from_coord(coord: Coord) -> kml::types::Coord<f64> {
    kml::types::Coord::new(coord.lon, coord.lat, Some(coord.alt))
}

fn line_style(id: &str, color: &str, width: f64) -> Kml<f64> {
    Kml::Style(Style {
        id: Some(id.to_string()),
        line: Some(LineStyle {
            color: color.to_string(),
            width,
            ..LineStyle::default()
        }),
        ..Style::default()
    })
}

fn line_placemark(name: &str, style_id: &str, coords: &[Coord]) -> Kml<f64> {
    let style_url = Element {
        name: "styleUrl".to_string(),
        content: Some(format!("#{style_id}")),
        ..Element::default()
    };
    Kml::Placemark(Placemark {
        name: Some(name.to_string()),
        geometry: Some(Geometry::LineString(LineString {
            coords: coords.iter().copied().map(from_coord).collect(),
            ..LineString::default()
        })),
        children: vec![style_url],
        ..Placemark::default()
    })
}
