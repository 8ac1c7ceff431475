//! Sample record types and registered schemas.
//!
//! `USER_SCHEMA` exercises every column kind: identifier, named text
//! columns, an enumerated column with a description table, a timestamp,
//! and an image-path column. `QUESTIONNAIRE_SCHEMA` is a plain grid used
//! for sorting and paging coverage.

use chrono::{DateTime, TimeZone, Utc};
use gridsource_types::{EnumTable, Extracted, FieldSpec, FieldValue, RecordSchema};
use once_cell::sync::Lazy;

/// Account role rendered through the enum description table.
///
/// `Moderator` deliberately has no declared description, so cells for it
/// fall back to the variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Moderator,
    Member,
}

impl UserRole {
    pub fn variant(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::Moderator => "Moderator",
            UserRole::Member => "Member",
        }
    }

    fn field_value(self) -> FieldValue {
        FieldValue::Enum {
            type_name: "UserRole".to_string(),
            variant: self.variant().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: Option<String>,
    pub role: UserRole,
    pub avatar_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub static USER_SCHEMA: Lazy<RecordSchema<User>> = Lazy::new(|| {
    RecordSchema::builder("User")
        .field(FieldSpec::new("Id"), |u: &User| Extracted::of(u.id))
        .field(
            FieldSpec::new("UserName").display_name("Name").grid(1),
            |u: &User| Extracted::of(u.user_name.clone()),
        )
        .field(
            FieldSpec::new("Email").display_name("Email").grid(2),
            |u: &User| Extracted::opt(u.email.clone()),
        )
        .field(
            FieldSpec::new("Role").display_name("Role").grid(3),
            |u: &User| Extracted::Value(u.role.field_value()),
        )
        .field(
            FieldSpec::new("CreatedAt").display_name("Created").grid(4),
            |u: &User| Extracted::of(u.created_at),
        )
        .field(
            FieldSpec::new("AvatarPath").grid(9).image_path(),
            |u: &User| Extracted::opt(u.avatar_path.clone()),
        )
        .enum_table(
            "UserRole",
            EnumTable::new()
                .with("Admin", "Administrator")
                .with("Member", "Member user"),
        )
        .build()
});

/// Deterministic creation timestamp derived from the record id.
pub fn created(id: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, (id % 60) as u32, 0).unwrap()
}

/// Three hand-picked users covering present/absent optionals and every
/// role; stable input for snapshot tests.
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            user_name: "Ada".to_string(),
            email: Some("ada@example.com".to_string()),
            role: UserRole::Admin,
            avatar_path: Some("/img/avatars/ada.png".to_string()),
            created_at: created(1),
        },
        User {
            id: 2,
            user_name: "Basia".to_string(),
            email: None,
            role: UserRole::Member,
            avatar_path: None,
            created_at: created(2),
        },
        User {
            id: 3,
            user_name: "Celina".to_string(),
            email: Some("celina@example.com".to_string()),
            role: UserRole::Moderator,
            avatar_path: None,
            created_at: created(3),
        },
    ]
}

/// Generate `count` users with ids 1..=count in insertion order.
pub fn users(count: usize) -> Vec<User> {
    (1..=count as i64)
        .map(|id| User {
            id,
            user_name: format!("User {:02}", id),
            email: Some(format!("user{:02}@example.com", id)),
            role: if id % 2 == 0 {
                UserRole::Member
            } else {
                UserRole::Admin
            },
            avatar_path: None,
            created_at: created(id),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Questionnaire {
    pub id: i64,
    pub title: String,
    pub answer_count: i64,
    pub published: bool,
}

pub static QUESTIONNAIRE_SCHEMA: Lazy<RecordSchema<Questionnaire>> = Lazy::new(|| {
    RecordSchema::builder("Questionnaire")
        .field(FieldSpec::new("Id"), |q: &Questionnaire| Extracted::of(q.id))
        .field(
            FieldSpec::new("Title").display_name("Title").grid(1),
            |q: &Questionnaire| Extracted::of(q.title.clone()),
        )
        .field(
            FieldSpec::new("AnswerCount").display_name("Answers").grid(2),
            |q: &Questionnaire| Extracted::of(q.answer_count),
        )
        .field(
            FieldSpec::new("Published").display_name("Published").grid(3),
            |q: &Questionnaire| Extracted::of(q.published),
        )
        .build()
});

pub fn questionnaire(id: i64, title: &str, answer_count: i64) -> Questionnaire {
    Questionnaire {
        id,
        title: title.to_string(),
        answer_count,
        published: id % 2 == 1,
    }
}
