//! Chat pipeline: transcript, stream decoding and the reply controller.

pub mod chunker;
pub mod controller;
pub mod decoder;
pub mod transcript;

pub use chunker::pieces;
pub use controller::{
    ChatController, ChatEvent, ChatUpdate, SubmitOutcome, SubmitRejection, UpdateKind,
    NO_RESULT_TEXT,
};
pub use decoder::Utf8StreamDecoder;
pub use transcript::Transcript;
