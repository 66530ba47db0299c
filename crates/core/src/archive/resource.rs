use super::page::ArchivePage;

/// Lazily created, addressable archive document.
///
/// `H` is whatever handle the host uses to address the document (a `blob:`
/// URL in the browser).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArchiveResource<H> {
    #[default]
    Unmaterialized,
    Materialized(H),
}

impl<H> ArchiveResource<H> {
    pub fn handle(&self) -> Option<&H> {
        match self {
            ArchiveResource::Unmaterialized => None,
            ArchiveResource::Materialized(handle) => Some(handle),
        }
    }

    pub fn is_materialized(&self) -> bool {
        self.handle().is_some()
    }

    /// Return the handle, creating it with `make` on first use.
    ///
    /// A failed `make` leaves the resource unmaterialized so a later
    /// activation can retry.
    pub fn get_or_materialize<E>(&mut self, make: impl FnOnce() -> Result<H, E>) -> Result<H, E>
    where
        H: Clone,
    {
        if let Some(handle) = self.handle() {
            return Ok(handle.clone());
        }
        let handle = make()?;
        *self = ArchiveResource::Materialized(handle.clone());
        Ok(handle)
    }
}

/// The affordance appended under the agenda: renders and materializes the
/// archive page on first activation, then hands back the same handle.
#[derive(Debug)]
pub struct ArchiveLink<H> {
    page: ArchivePage,
    resource: ArchiveResource<H>,
}

impl<H> ArchiveLink<H> {
    pub fn new(page: ArchivePage) -> Self {
        Self {
            page,
            resource: ArchiveResource::Unmaterialized,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.page.entries.len()
    }

    pub fn resource(&self) -> &ArchiveResource<H> {
        &self.resource
    }

    /// `materialize` receives the rendered document. It runs at most once
    /// successfully over the link's lifetime.
    pub fn activate<E>(&mut self, materialize: impl FnOnce(&str) -> Result<H, E>) -> Result<H, E>
    where
        H: Clone,
    {
        let page = &self.page;
        self.resource.get_or_materialize(|| {
            let html = page.render();
            tracing::debug!(entries = page.entries.len(), bytes = html.len(), "materializing archive page");
            materialize(&html)
        })
    }
}
