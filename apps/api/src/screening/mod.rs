// Resume screening: attribute extraction, scoring, the shared pipeline and its HTTP surface.
// All model calls go through llm_client; all persistence goes through store.

pub mod attributes;
pub mod documents;
pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod scorer;
pub mod service;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;
