//! # Bowlkit Designer
//!
//! Geometry engine for segmented turned vessels. A wall profile drawn as
//! cubic-bezier control points becomes a centerline, inner and outer wall
//! surfaces, a stack of horizontal rings with radial bounds, and the wedge
//! trapezoids of each ring's segments.
//!
//! ## Pipeline
//!
//! ```text
//! ControlPointSet (mm)
//!   └── evaluate_profile      -> ProfileCurve (centerline)
//!         └── offset_curve    -> OffsetCurvePair (inner / outer wall)
//!               ├── calc_rings     -> BowlGeometry (height, radius, ring xvals)
//!               │     └── calc_ring_trapz -> SegmentTrapezoid per segment
//!               └── split_ring_y   -> wall slices per ring
//! ```
//!
//! Every stage is a pure function of its inputs. Inputs are validated once
//! (`ControlPointSet::new`, `Ring::validate`, `BowlProfile::validate`) and
//! errors are reported as [`bowlkit_core::GeometryError`].
//!
//! Around the engine sit the cut-list [`report`] and the design file format
//! in [`serialization`].
//!
//! ## Usage
//!
//! ```rust
//! use bowlkit_designer::{calc_ring_trapz, calc_rings, BowlProfile};
//!
//! let profile = BowlProfile::default();
//! let geometry = calc_rings(&profile).unwrap();
//! for (index, ring) in geometry.used().iter().enumerate() {
//!     let segments = calc_ring_trapz(ring, index, true).unwrap();
//!     assert_eq!(segments.trapezoids.len(), ring.segs);
//! }
//! ```

pub mod bezier;
pub mod model;
pub mod offset;
pub mod partition;
pub mod report;
pub mod ring;
pub mod ring_calculator;
pub mod segments;
pub mod serialization;
pub mod viewport;

pub use bezier::{cubic_point, evaluate_profile};
pub use model::{ControlPointSet, Point, ProfileCurve, DEGENERATE_STEP_TOLERANCE};
pub use offset::{offset_curve, OffsetCurvePair};
pub use partition::split_ring_y;
pub use report::{cut_list, format_cut_list, segment_groups, CutListRow, SegmentGroup};
pub use ring::{Ring, RingFactory, XVals};
pub use ring_calculator::{
    calc_rings, calc_rings_with, wall_curves, BowlGeometry, BowlProfile, CalcRingsResult,
    WallCurves,
};
pub use segments::{calc_ring_trapz, CalcRingTrapzResult, SegmentTrapezoid};
pub use serialization::{DesignFile, DesignHistory, DesignMetadata, DesignSettings};
pub use viewport::Viewport;
