pub mod email_message_template;
pub mod log;
pub mod prelude;
pub mod send_status;
