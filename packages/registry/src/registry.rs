use chrono::Utc;
use pagecraft_model::{slugify, IdGenerator, NewSite, Site, SitePatch};

/// Registry of website records.
///
/// All identity-taking operations are total: a missing identity is a
/// no-op, never an error. Deleting the selected site clears the selection,
/// so the stored snapshot never outlives its record.
#[derive(Debug)]
pub struct SiteRegistry {
    sites: Vec<Site>,

    /// Resolved value snapshot of the site being edited.
    selected: Option<Site>,

    ids: IdGenerator,
}

impl SiteRegistry {
    pub fn new() -> Self {
        Self {
            sites: Vec::new(),
            selected: None,
            ids: IdGenerator::new("registry://sites"),
        }
    }

    /// Add a site and return its fresh identity. The slug is derived from
    /// the name when not assigned; `last_edited_at` is stamped now.
    pub fn add_site(&mut self, site: NewSite) -> String {
        let id = self.ids.new_id();
        let slug = site.slug.unwrap_or_else(|| slugify(&site.name));

        tracing::debug!(id = %id, name = %site.name, slug = %slug, "add site");

        self.sites.push(Site {
            id: id.clone(),
            name: site.name,
            slug,
            thumbnail: site.thumbnail,
            last_edited_at: Utc::now(),
            status: site.status,
            module_count: site.module_count,
        });

        id
    }

    /// Shallow-merge a patch into the site with `id`, touching
    /// `last_edited_at`. A selected site's snapshot is refreshed so reads
    /// through the selection never go stale. Returns whether a site was
    /// updated.
    pub fn update_site(&mut self, id: &str, patch: SitePatch) -> bool {
        let Some(site) = self.sites.iter_mut().find(|s| s.id == id) else {
            tracing::warn!(id, "update: no such site");
            return false;
        };

        site.apply_patch(patch);
        site.last_edited_at = Utc::now();

        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = Some(site.clone());
        }

        tracing::debug!(id, "update site");
        true
    }

    /// Remove the site with `id`, clearing a matching selection. Returns
    /// whether a site was removed.
    pub fn delete_site(&mut self, id: &str) -> bool {
        let Some(index) = self.sites.iter().position(|s| s.id == id) else {
            tracing::warn!(id, "delete: no such site");
            return false;
        };

        self.sites.remove(index);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }

        tracing::debug!(id, "delete site");
        true
    }

    /// Resolve `id` against the current list and store the record as the
    /// selection snapshot; absent identities and `None` both clear it.
    pub fn select_site(&mut self, id: Option<&str>) {
        self.selected = id.and_then(|id| self.get(id)).cloned();
    }

    pub fn selected_site(&self) -> Option<&Site> {
        self.selected.as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&Site> {
        self.sites.iter().find(|s| s.id == id)
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
