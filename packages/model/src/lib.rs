//! Shared data types for the StudyHall workspace.
//!
//! Everything in this crate crosses the server/client boundary via Dioxus
//! server functions, so every type is `Serialize + Deserialize + PartialEq`.
//! Serialized field names follow the submitted form-field names
//! (`firstName`, `meetingTime`, ...) — those names are the wire contract.

pub mod classroom;
pub mod outcome;
pub mod report;
pub mod study;
pub mod user;

pub use classroom::{ClassInfo, NewClass, NewMember};
pub use outcome::Outcome;
pub use report::{NewReport, ReportInfo};
pub use study::{
    CardInput, FlashcardSetInfo, NewFlashcardSet, NewNote, NewTest, NoteInfo, QuestionInput,
    TestInfo,
};
pub use user::{ProfileAttributes, UpdateAccount, UserInfo};
