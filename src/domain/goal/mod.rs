pub mod answers;
pub mod composer;
pub mod priority;
pub mod submission;

pub use answers::{AnswerSet, AnswerValue};
pub use composer::{compose, ComposedResult};
pub use priority::{classify_priority, Priority};
pub use submission::{
    NewSubmission, QuestionResponse, StoredResponse, Submission, SubmissionId, SubmissionPage,
};
