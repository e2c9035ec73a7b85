pub mod answer_graph;
pub mod record;
pub mod record_set;
pub mod record_type;

pub use answer_graph::{resolve_facts, Resolution, MAX_TRAVERSAL_STEPS};
pub use record::{AnswerRecord, DecodedMessage, Question, RecordTarget};
pub use record_set::{DnsRecordSet, LinkedRecord};
pub use record_type::RecordType;
