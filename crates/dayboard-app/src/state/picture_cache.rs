use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use dayboard_core::data_uri;

/// A decoded picture registered with egui under `uri`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CachedPicture {
    pub(crate) uri: String,
    pub(crate) bytes: Arc<[u8]>,
}

/// Decoded `data:` URIs, keyed by the URI text.
///
/// Pictures are decoded once and dropped when no task or draft row shows
/// them anymore. URIs that fail to decode are remembered as `None` so the
/// warning is logged once.
#[derive(Debug, Default)]
pub(crate) struct PictureCache {
    entries: HashMap<String, Option<CachedPicture>>,
    next_id: u64,
}

impl PictureCache {
    #[must_use]
    pub(crate) fn get(&self, src: &str) -> Option<&CachedPicture> {
        self.entries.get(src).and_then(Option::as_ref)
    }

    /// Decodes new sources and evicts unused ones.
    ///
    /// Returns the egui URIs of evicted pictures so their textures can be
    /// forgotten.
    pub(crate) fn refresh<'a>(
        &mut self,
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Vec<String> {
        let mut live = HashSet::new();
        for src in sources.into_iter().filter(|src| !src.is_empty()) {
            live.insert(src);
            if !self.entries.contains_key(src) {
                let picture = self.decode(src);
                self.entries.insert(src.to_owned(), picture);
            }
        }

        let mut evicted = Vec::new();
        self.entries.retain(|src, picture| {
            let keep = live.contains(src.as_str());
            if !keep && let Some(picture) = picture {
                evicted.push(picture.uri.clone());
            }
            keep
        });
        evicted
    }

    fn decode(&mut self, src: &str) -> Option<CachedPicture> {
        match data_uri::decode(src) {
            Ok(decoded) => {
                self.next_id += 1;
                Some(CachedPicture {
                    uri: format!("bytes://picture-{}", self.next_id),
                    bytes: decoded.bytes.into(),
                })
            }
            Err(err) => {
                log::warn!("cannot show task picture: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dayboard_core::data_uri;

    use super::PictureCache;

    #[test]
    fn pictures_are_decoded_once_and_evicted_when_unused() {
        let first = data_uri::encode("image/png", b"one");
        let second = data_uri::encode("image/png", b"two");
        let mut cache = PictureCache::default();

        assert!(cache.refresh([first.as_str(), second.as_str(), ""]).is_empty());
        let uri = cache.get(&first).unwrap().uri.clone();
        assert_eq!(&*cache.get(&first).unwrap().bytes, b"one");

        assert!(cache.refresh([first.as_str()]).len() == 1);
        assert_eq!(cache.get(&first).unwrap().uri, uri);
        assert!(cache.get(&second).is_none());
    }

    #[test]
    fn undecodable_source_is_kept_as_missing() {
        let mut cache = PictureCache::default();
        assert!(cache.refresh(["data:nonsense"]).is_empty());
        assert!(cache.get("data:nonsense").is_none());
        assert!(cache.refresh([]).is_empty());
    }
}
