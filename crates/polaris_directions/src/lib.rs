pub mod leg_annotation;
pub mod route;
pub mod route_leg;
pub mod waypoint;
