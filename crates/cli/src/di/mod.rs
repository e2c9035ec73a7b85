mod fanout;

pub use fanout::FanoutServices;
