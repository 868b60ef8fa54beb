//! Blueprint registry and map-frame placement.
//!
//! A [`Blueprint`] is a named fragment of a floor plan, already reduced
//! to line features by the caller. The [`BlueprintIndex`] keeps a
//! deterministic registry of fragments and can locate all of them in a
//! map with one call, reporting each hit as a [`Placement`] in map
//! coordinates.

use log::debug;

use crate::config::MatcherConfig;
use crate::core::Point2D;
use crate::features::LineFeature;
use crate::matching::SegmentMatch;
use crate::segment::SegmentCollection;

/// A named floor-plan fragment with pre-extracted line features.
#[derive(Clone, Debug)]
pub struct Blueprint {
    /// Registry name; re-inserting the same name replaces the entry.
    pub name: String,
    /// Line features of the fragment, in blueprint coordinates.
    pub lines: Vec<LineFeature>,
    /// Anchor point reported for placements, in blueprint coordinates.
    /// Typically the fragment's centroid.
    pub anchor: Point2D,
    /// Metres per coordinate unit. Carried for callers that need to
    /// convert placements; the matcher itself works in coordinate units.
    pub scale: f32,
}

impl Blueprint {
    /// Create a blueprint.
    pub fn new(name: &str, lines: Vec<LineFeature>, anchor: Point2D, scale: f32) -> Self {
        Self {
            name: name.to_string(),
            lines,
            anchor,
            scale,
        }
    }
}

/// A blueprint located in the search map's frame.
#[derive(Clone, Debug)]
pub struct Placement {
    /// Name of the located blueprint.
    pub name: String,
    /// Blueprint anchor expressed in map coordinates.
    pub position: Point2D,
    /// Rotation from blueprint frame to map frame, radians, π-periodic.
    pub rotation: f32,
    /// True when the fragment matched as a mirror image.
    pub mirrored: bool,
    /// Quality score of the underlying segment match, in `[0, 1]`.
    pub confidence: f32,
}

/// Insertion-ordered registry of blueprints.
///
/// Re-inserting a name replaces that entry in place, so iteration order
/// is deterministic and stable across updates.
#[derive(Clone, Debug, Default)]
pub struct BlueprintIndex {
    blueprints: Vec<Blueprint>,
    config: MatcherConfig,
}

impl BlueprintIndex {
    /// Create an empty index with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with the given matcher configuration.
    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            blueprints: Vec::new(),
            config,
        }
    }

    /// Register a blueprint, replacing any existing entry with the same
    /// name.
    pub fn insert(&mut self, blueprint: Blueprint) {
        match self
            .blueprints
            .iter_mut()
            .find(|existing| existing.name == blueprint.name)
        {
            Some(slot) => *slot = blueprint,
            None => self.blueprints.push(blueprint),
        }
    }

    /// Look up a blueprint by name.
    pub fn get(&self, name: &str) -> Option<&Blueprint> {
        self.blueprints.iter().find(|b| b.name == name)
    }

    /// Registered blueprints in insertion order.
    #[inline]
    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    /// Number of registered blueprints.
    #[inline]
    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    /// True when no blueprints are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// Locate every registered blueprint in a map described by line
    /// features.
    ///
    /// The map lines are stitched once. Each blueprint's lines are then
    /// stitched and matched against the map, and every valid alignment
    /// becomes a [`Placement`]: the blueprint anchor is expressed
    /// relative to the first matched blueprint line, rotated by the match
    /// rotation, and re-based on the first matched map line.
    pub fn locate(&self, map_lines: &[LineFeature]) -> Vec<Placement> {
        let mut map = SegmentCollection::with_config(self.config.clone());
        map.add_lines(map_lines);

        let mut placements = Vec::new();
        for blueprint in &self.blueprints {
            let mut fragment = SegmentCollection::with_config(self.config.clone());
            fragment.add_lines(&blueprint.lines);

            for found in fragment.match_segments(&map) {
                placements.push(placement_from_match(blueprint, &found));
            }
        }
        debug!(
            "[Locate] {} blueprints produced {} placements",
            self.blueprints.len(),
            placements.len()
        );
        placements
    }
}

/// Convert one segment match into a placement.
///
/// The match's first sub-chain comes from the blueprint and its second
/// from the map, so the rotation maps blueprint-frame displacements into
/// map frame.
fn placement_from_match(blueprint: &Blueprint, found: &SegmentMatch) -> Placement {
    let blueprint_ref = found.segment1().front().midpoint();
    let map_ref = found.segment2().front().midpoint();
    let position = (blueprint.anchor - blueprint_ref).rotate(found.rotation()) + map_ref;
    Placement {
        name: blueprint.name.clone(),
        position,
        rotation: found.rotation(),
        mirrored: found.flipped(),
        confidence: found.confidence(),
    }
}
