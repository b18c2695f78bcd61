// Domain layer - Core value types

pub mod model;
