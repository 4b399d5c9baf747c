//! Shape tree produced by the WKT parser
//!
//! A parse builds the tree bottom-up and hands it to the caller whole. Nothing in the tree
//! is mutated after construction: builders take their parts in `new` and only expose
//! read accessors.

pub mod coordinate;
pub mod position;
pub mod shape_type;
pub mod shapes;

pub use coordinate::Coordinate;
pub use position::{Position, SourceLocation};
pub use shape_type::GeoShapeType;
pub use shapes::{
    EnvelopeBuilder, GeometryCollectionBuilder, LineStringBuilder, MultiLineStringBuilder,
    MultiPointBuilder, MultiPolygonBuilder, Orientation, PointBuilder, PolygonBuilder,
    ShapeBuilder,
};
