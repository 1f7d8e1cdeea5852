pub mod locate_point;
