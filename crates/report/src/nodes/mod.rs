mod block;
mod image;
mod label;
mod titled_box;

pub use block::BoxNode;
pub use image::ImageNode;
pub use label::LabelNode;
pub use titled_box::{TITLE_MARGIN_MM, TitledBoxNode, TitledBoxOptions};
