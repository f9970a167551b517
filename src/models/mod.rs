//! Data models

mod attendance;
mod branch;
mod department;
mod fee;
mod grade;
mod group;
mod holiday;
mod invoice;
mod resource;
mod school_class;
mod section;
mod student;
mod subject;
mod teacher;

pub use attendance::*;
pub use branch::*;
pub use department::*;
pub use fee::*;
pub use grade::*;
pub use group::*;
pub use holiday::*;
pub use invoice::*;
pub use resource::*;
pub use school_class::*;
pub use section::*;
pub use student::*;
pub use subject::*;
pub use teacher::*;
