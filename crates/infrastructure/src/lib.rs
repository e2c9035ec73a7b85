pub mod dns;
pub mod dnstap;
pub mod fanout;
pub mod framestream;
pub mod lookup_wire;
pub mod tap;
