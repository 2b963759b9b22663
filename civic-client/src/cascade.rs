//! Cascading dependent selection over the geographic hierarchy
//!
//! A selector is bounded by a `(top, bottom)` pair of levels. Choosing a
//! value at one level clears every selection and option list below it and
//! fetches the options of the next level filtered by the chosen id.
//!
//! All mutating operations take `&mut self`, so a response can never land on
//! a selector whose selection moved on while the request was in flight.

use crate::api::AdminApi;
use crate::http::HttpClient;
use shared::hierarchy::{GeoLevel, GeoPath, SelectOption};
use shared::resource::ResourceKind;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct CascadingSelector {
    top: GeoLevel,
    bottom: GeoLevel,
    path: GeoPath,
    options: BTreeMap<GeoLevel, Vec<SelectOption>>,
}

impl CascadingSelector {
    /// Selector over `top..=bottom`; the bounds are swapped if given upside down
    pub fn new(top: GeoLevel, bottom: GeoLevel) -> Self {
        let (top, bottom) = if top <= bottom { (top, bottom) } else { (bottom, top) };
        Self {
            top,
            bottom,
            path: GeoPath::default(),
            options: BTreeMap::new(),
        }
    }

    /// Selector used by the edit form of `kind`: every ancestor level the
    /// form asks for, starting at country (continent for countries)
    pub fn for_form(kind: ResourceKind) -> Option<Self> {
        let (top, bottom) = match kind {
            ResourceKind::Country => (GeoLevel::Continent, GeoLevel::Continent),
            ResourceKind::State => (GeoLevel::Country, GeoLevel::Country),
            ResourceKind::District => (GeoLevel::Country, GeoLevel::State),
            ResourceKind::City => (GeoLevel::Country, GeoLevel::District),
            ResourceKind::Zone => (GeoLevel::Country, GeoLevel::City),
            ResourceKind::Ward => (GeoLevel::Country, GeoLevel::Zone),
            ResourceKind::Customer => (GeoLevel::Country, GeoLevel::Ward),
            _ => return None,
        };
        Some(Self::new(top, bottom))
    }

    pub fn top(&self) -> GeoLevel {
        self.top
    }

    pub fn bottom(&self) -> GeoLevel {
        self.bottom
    }

    pub fn levels(&self) -> impl Iterator<Item = GeoLevel> {
        GeoLevel::range(self.top, self.bottom)
    }

    pub fn contains(&self, level: GeoLevel) -> bool {
        level >= self.top && level <= self.bottom
    }

    /// Load the unfiltered option list of the top level
    pub async fn load_root<C: HttpClient>(&mut self, api: &AdminApi<C>) {
        let top = self.top;
        self.fetch(api, top, None).await;
    }

    /// Change the selection at `level`
    ///
    /// Clears every descendant selection and option list, then fetches the
    /// child level's options when an id was chosen. Exactly one request is
    /// issued per call at most.
    pub async fn select<C: HttpClient>(
        &mut self,
        api: &AdminApi<C>,
        level: GeoLevel,
        id: Option<i64>,
    ) {
        if !self.contains(level) {
            tracing::warn!(%level, "selection outside selector bounds ignored");
            return;
        }

        self.path.set(level, id);
        self.path.clear_below(level);
        self.options.retain(|l, _| *l <= level);

        let child = level.child().filter(|c| self.contains(*c));
        if let (Some(id), Some(child)) = (id, child) {
            self.fetch(api, child, Some((level, id))).await;
        }
    }

    /// Edit-mode pre-population
    ///
    /// Walks the chain top-down, awaiting each fetch before the next. Each
    /// level's options are filtered by the nearest applied ancestor, so an
    /// empty optional level (a ward without district) does not hide the
    /// levels below it. A stored id is applied only if it is a member of its
    /// freshly loaded option list; the walk stops at the first level where
    /// it is not.
    pub async fn preload<C: HttpClient>(&mut self, api: &AdminApi<C>, stored: &GeoPath) {
        self.path = GeoPath::default();
        self.options.clear();
        self.load_root(api).await;

        let mut anchor: Option<(GeoLevel, i64)> = None;
        for level in GeoLevel::range(self.top, self.bottom) {
            if level != self.top {
                let Some((anchor_level, _)) = anchor else {
                    break;
                };
                // past a gap, only fetch while something below is still stored
                let gap = level.parent() != Some(anchor_level);
                if gap && !GeoLevel::range(level, self.bottom).any(|l| stored.get(l).is_some()) {
                    break;
                }
                self.fetch(api, level, anchor).await;
            }
            let Some(id) = stored.get(level) else {
                continue;
            };
            if !self.options(level).iter().any(|o| o.value == id) {
                tracing::warn!(%level, id, "stored selection not among options, preload stopped");
                break;
            }
            self.path.set(level, Some(id));
            anchor = Some((level, id));
        }
    }

    pub fn selected(&self, level: GeoLevel) -> Option<i64> {
        self.path.get(level)
    }

    pub fn options(&self, level: GeoLevel) -> &[SelectOption] {
        self.options.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Label of the selected option at `level`
    pub fn selected_label(&self, level: GeoLevel) -> Option<&str> {
        let id = self.selected(level)?;
        self.options(level)
            .iter()
            .find(|o| o.value == id)
            .map(|o| o.label.as_str())
    }

    pub fn path(&self) -> GeoPath {
        self.path
    }

    async fn fetch<C: HttpClient>(
        &mut self,
        api: &AdminApi<C>,
        level: GeoLevel,
        ancestor: Option<(GeoLevel, i64)>,
    ) {
        let options = match api.options_within(level, ancestor).await {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(%level, ?ancestor, error = %e, "failed to load options");
                Vec::new()
            }
        };
        self.options.insert(level, options);
    }
}
