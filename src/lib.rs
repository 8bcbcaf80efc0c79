// Studio Roster - Core Library
// Record transforms for members and yoga classes, plus fixture loading

pub mod truthy;
pub mod objects;
pub mod entities;
pub mod classes;
pub mod members;
pub mod fixtures;

// Re-export commonly used types
pub use truthy::is_truthy;
pub use objects::{
    number_of_keys, sum_numbers, new_member_array_to_object, omit_keys, property_key,
};
pub use entities::{Level, Member, YogaClass};
pub use classes::{
    ClassPrice, ClassSummary, InstructorCount, NO_INSTRUCTOR_MESSAGE,
    group_class_by_instructor, count_classes_by_instructor,
    get_unique_classes, order_classes_by_title_and_level,
};
pub use members::{omit_age_from_members, remove_inactive_members};
pub use fixtures::{FixtureConfig, FixtureSet, load_json, load_classes_csv};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
