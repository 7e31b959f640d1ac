pub mod abac;
pub mod callout;
pub mod code_examples;
pub mod code_line;
pub mod comparison;
pub mod flows;
pub mod footer;
pub mod grid_list;
pub mod hero;
pub mod icons;
pub mod jwt_diagram;
pub mod navbar;
pub mod palette;
pub mod pros_cons;
pub mod reveal;
pub mod section;
pub mod simulator;
