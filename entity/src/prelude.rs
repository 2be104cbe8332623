pub use super::email_message_template::Entity as EmailMessageTemplate;
pub use super::log::Entity as Log;
pub use super::send_status::SendStatus;
