//! Data models for database seeding configuration.

use rust_decimal::Decimal;
use sportsplus_models::{ClassId, ClassStatus, UserRole};

/// Domain used by every generated email; `clear-seed` deletes by it.
pub const SEED_EMAIL_DOMAIN: &str = "example.com";

/// Seed data for creating a user.
pub struct UserSeed {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub role: UserRole,
}

/// Seed data for creating a class listing.
pub struct ClassSeed {
    pub name: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub email: String,
    pub price: Decimal,
    pub seats: i32,
    pub student: i32,
    pub status: ClassStatus,
}

/// Seed data for a student's cart selection.
pub struct CartSeed {
    pub email: String,
    pub class_id: ClassId,
    pub class_name: String,
    pub instructor_name: String,
    pub price: Decimal,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub instructors: usize,
    pub classes_per_instructor: usize,
    pub students: usize,
    /// Cart selections per student, drawn from approved classes.
    pub selections_per_student: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            instructors: 5,
            classes_per_instructor: 3,
            students: 40,
            selections_per_student: 2,
        }
    }
}

impl SeedConfig {
    pub fn with_instructors(mut self, instructors: usize) -> Self {
        self.instructors = instructors;
        self
    }

    pub fn with_classes_per_instructor(mut self, classes: usize) -> Self {
        self.classes_per_instructor = classes;
        self
    }

    pub fn with_students(mut self, students: usize) -> Self {
        self.students = students;
        self
    }

    pub fn with_selections(mut self, selections: usize) -> Self {
        self.selections_per_student = selections;
        self
    }

    pub fn total_classes(&self) -> usize {
        self.instructors * self.classes_per_instructor
    }

    pub fn total_users(&self) -> usize {
        self.instructors + self.students
    }
}
