/// Centralizes the Valkey key naming scheme shared by the record store and
/// the list protocol.
#[derive(Debug, Clone)]
pub(crate) struct StorageKeys {
    /// Normalized persistence prefix applied to every list key. Two
    /// deployments sharing one server stay disjoint by choosing different
    /// prefixes.
    pub(crate) namespace: String,
}

impl StorageKeys {
    /// Builds the key scheme, defaulting to the `valq` namespace when none is
    /// provided.
    pub(crate) fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let namespace = if namespace.is_empty() {
            "valq".to_string()
        } else {
            namespace
        };
        Self { namespace }
    }

    /// List of identifiers awaiting a worker claim.
    pub(crate) fn ready(&self, queue: &str) -> String {
        format!("{}[{}]", self.namespace, queue)
    }

    /// List of identifiers currently claimed. Always the ready key plus a
    /// fixed suffix, so the pair for one queue can never diverge.
    pub(crate) fn processing(&self, queue: &str) -> String {
        format!("{}-processing", self.ready(queue))
    }

    /// Storage key holding one encoded job record.
    pub(crate) fn job(id: &str) -> String {
        format!("job:{id}")
    }
}
