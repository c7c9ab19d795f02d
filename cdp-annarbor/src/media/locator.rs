//! Media lookup chain
//!
//! Steps, each ending the chain on failure or absence:
//! 1. Show from the event's media URL, or, without one, a last-resort saved
//!    search for a City Council show titled `citycouncilYYMMDD`
//! 2. First VOD listed on the show (zero VODs: not published yet)
//! 3. VOD playable URL, with captions next to it
//!
//! Failures never escape `locate_media`; they are logged and yield no media.

use cdp_common::models::ContentUris;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use super::cablecast_client::{CatalogApi, CatalogError, Show};
use crate::legistar::RawEvent;

/// Caption file published next to every VOD
pub const CAPTION_FILE_NAME: &str = "captions.vtt";

/// Only regular City Council sessions are searched for
const SEARCHABLE_BODY: &str = "City Council";

/// Media locator over a video catalog
#[derive(Clone)]
pub struct MediaLocator {
    catalog: Arc<dyn CatalogApi>,
    saved_search_id: u64,
    max_search_candidates: usize,
}

impl MediaLocator {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        saved_search_id: u64,
        max_search_candidates: usize,
    ) -> Self {
        Self {
            catalog,
            saved_search_id,
            max_search_candidates,
        }
    }

    /// Video and caption URLs for an event: zero or one entry
    pub async fn locate_media(&self, event: &RawEvent) -> Vec<ContentUris> {
        match self.try_locate(event).await {
            Ok(Some(uris)) => vec![uris],
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!(
                    event_id = event.event_id,
                    error = %e,
                    "Failed to determine content URIs"
                );
                Vec::new()
            }
        }
    }

    async fn try_locate(&self, event: &RawEvent) -> Result<Option<ContentUris>, CatalogError> {
        let media_url = event
            .media
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty());

        let show = match media_url {
            Some(media_url) => {
                let show_id = show_id_from_media_url(media_url)?;
                self.catalog.show(&show_id).await?
            }
            None => {
                debug!(
                    event_id = event.event_id,
                    "No media url in Legistar info, searching the catalog directly"
                );
                match self.search_for_meeting(event).await? {
                    Some(show) => show,
                    None => return Ok(None),
                }
            }
        };

        let Some(&vod_id) = show.vods.first() else {
            debug!(show_id = ?show.id, "No vod file available (yet?)");
            return Ok(None);
        };
        if show.vods.len() > 1 {
            debug!(
                show_id = ?show.id,
                vods = show.vods.len(),
                "Show lists several vods, using the first"
            );
        }

        let vod = self.catalog.vod(vod_id).await?;
        let caption_uri = caption_url(&vod.url);

        Ok(Some(ContentUris {
            video_uri: vod.url,
            caption_uri,
        }))
    }

    /// Find the show for a regular City Council meeting by title convention
    async fn search_for_meeting(&self, event: &RawEvent) -> Result<Option<Show>, CatalogError> {
        if event.body_name != SEARCHABLE_BODY {
            debug!(body = %event.body_name, "Not a City Council meeting; skipping");
            return Ok(None);
        }
        let comment = event.comment.as_deref().unwrap_or_default().to_lowercase();
        if comment.contains("special session") {
            debug!("Not a regular City Council session; skipping");
            return Ok(None);
        }

        let expected_title = expected_show_title(event);
        let show_ids = self
            .catalog
            .saved_search_results(self.saved_search_id)
            .await?;

        for show_id in show_ids.iter().take(self.max_search_candidates) {
            let show = self.catalog.show(&show_id.to_string()).await?;
            let matches = show
                .title
                .as_deref()
                .is_some_and(|t| t.to_lowercase() == expected_title);
            if matches {
                return Ok(Some(show));
            }
        }

        debug!(title = %expected_title, "Show not found in catalog");
        Ok(None)
    }
}

/// Show title the station uses for a City Council meeting
pub fn expected_show_title(event: &RawEvent) -> String {
    event.date.format("citycouncil%y%m%d").to_string()
}

/// Show id: last path segment of the media URL
pub fn show_id_from_media_url(media_url: &str) -> Result<String, CatalogError> {
    let url = Url::parse(media_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(CatalogError::Missing("show id in media url"))
}

/// Caption URL: the VOD URL with its last path segment replaced
pub fn caption_url(vod_url: &str) -> String {
    match vod_url.rsplit_once('/') {
        Some((dir, _)) => format!("{}/{}", dir, CAPTION_FILE_NAME),
        None => format!("{}/{}", vod_url, CAPTION_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caption_url_replaces_last_segment() {
        assert_eq!(
            caption_url("https://x/a/b/video.mp4"),
            "https://x/a/b/captions.vtt"
        );
    }

    #[test]
    fn test_show_id_from_media_url() {
        assert_eq!(
            show_id_from_media_url("https://reflect-ctn.cablecast.tv/internetchannel/show/10571?site=1")
                .unwrap(),
            "10571"
        );
        assert!(matches!(
            show_id_from_media_url("not a url"),
            Err(CatalogError::InvalidUrl(_))
        ));
        assert!(matches!(
            show_id_from_media_url("https://reflect-ctn.cablecast.tv/show/"),
            Err(CatalogError::Missing(_))
        ));
    }

    #[test]
    fn test_expected_show_title() {
        let event: RawEvent = serde_json::from_value(json!({
            "EventId": 1,
            "EventBodyName": "City Council",
            "EventDate": "2021-06-07T00:00:00"
        }))
        .unwrap();
        assert_eq!(expected_show_title(&event), "citycouncil210607");
    }
}
