pub mod chat_responder;
pub mod client;
pub mod hashtag_generator;
pub mod response;

#[cfg(test)]
pub(crate) mod test_support;
