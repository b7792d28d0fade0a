pub mod aggregator;
pub mod period;

pub use aggregator::{
    aggregate_stats, seeded_stats, AnalyticsReport, AnswerRow, PriorityCount, QuestionStats,
};
pub use period::Period;
