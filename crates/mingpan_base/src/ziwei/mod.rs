//! ZiWei Dou Shu (紫微斗數) palace and star calculation.

pub mod layout;
pub mod palace;
pub mod placement;
pub mod star;

pub use layout::{ZiweiLayout, ziwei_layout};
pub use palace::{
    ALL_PALACE_NAMES, Palace, PalaceName, PalaceRef, PlacedStar, body_palace_branch_index,
    life_palace_branch_index, palace_stem, tiger_stem,
};
pub use placement::{
    StarGroup, auxiliary_branch_index, main_star_branch_index, main_star_offset,
    tianfu_branch_index, ziwei_branch_index,
};
pub use star::{
    ALL_TRANSFORMATIONS, AUXILIARY_STARS, MAIN_STARS, Star, StarKind, Transformation, sihua_stars,
    transformation_of,
};
