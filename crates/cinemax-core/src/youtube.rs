use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{CinemaxError, Result};
use crate::types::{VideoDetail, VideoRecord};

const CHANNELS_URL: &str = "https://www.googleapis.com/youtube/v3/channels";
const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Page size for search results and batch limit for detail lookups.
pub const MAX_BATCH_SIZE: usize = 50;

/// Client for the three read-only YouTube Data API v3 endpoints.
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Resolve a channel handle to its channel id.
    ///
    /// A response with no matching items is fatal; there is no fallback handle.
    pub async fn resolve_channel_id(&self, handle: &str) -> Result<String> {
        let body = self
            .http
            .get(CHANNELS_URL)
            .query(&[("part", "id"), ("forHandle", handle), ("key", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let resp: ChannelListResponse = serde_json::from_str(&body)?;

        first_channel_id(resp, handle)
    }

    /// Start a lazy page cursor over the channel's uploads, newest first.
    pub fn video_pages(&self, channel_id: &str) -> VideoPages<'_> {
        VideoPages {
            client: self,
            channel_id: channel_id.to_string(),
            page_token: None,
            done: false,
        }
    }

    /// Drain the page cursor into the complete newest-first video list.
    pub async fn list_channel_videos(&self, channel_id: &str) -> Result<Vec<VideoRecord>> {
        let mut pages = self.video_pages(channel_id);
        let mut videos = Vec::new();
        while let Some(page) = pages.next_page().await? {
            videos.extend(page);
        }
        Ok(videos)
    }

    /// Fetch duration/category/description for each video, in chunks of 50.
    ///
    /// Videos absent from the response (deleted or private since listing)
    /// are simply absent from the returned map.
    pub async fn fetch_video_details(
        &self,
        video_ids: &[String],
    ) -> Result<HashMap<String, VideoDetail>> {
        let mut details = HashMap::new();

        for batch in video_ids.chunks(MAX_BATCH_SIZE) {
            let ids = batch.join(",");
            let body = self
                .http
                .get(VIDEOS_URL)
                .query(&[
                    ("part", "contentDetails,snippet"),
                    ("id", ids.as_str()),
                    ("key", &self.api_key),
                ])
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?;
            let resp: VideoListResponse = serde_json::from_str(&body)?;

            for item in resp.items {
                details.insert(
                    item.id,
                    VideoDetail {
                        duration_seconds: parse_iso8601_duration(&item.content_details.duration),
                        category: item
                            .snippet
                            .category_id
                            .unwrap_or_else(|| "Unknown".to_string()),
                        description: item.snippet.description,
                    },
                );
            }
        }

        Ok(details)
    }
}

/// Lazy, restartable cursor over the channel search results.
///
/// Each call issues one request; the cursor is exhausted once a response
/// carries no continuation token.
pub struct VideoPages<'a> {
    client: &'a YouTubeClient,
    channel_id: String,
    page_token: Option<String>,
    done: bool,
}

impl VideoPages<'_> {
    pub async fn next_page(&mut self) -> Result<Option<Vec<VideoRecord>>> {
        if self.done {
            return Ok(None);
        }

        let mut query = vec![
            ("part", "snippet,id".to_string()),
            ("channelId", self.channel_id.clone()),
            ("order", "date".to_string()),
            ("type", "video".to_string()),
            ("maxResults", MAX_BATCH_SIZE.to_string()),
            ("key", self.client.api_key.clone()),
        ];
        if let Some(token) = &self.page_token {
            query.push(("pageToken", token.clone()));
        }

        let body = self
            .client
            .http
            .get(SEARCH_URL)
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let resp: SearchListResponse = serde_json::from_str(&body)?;

        let page = resp
            .items
            .into_iter()
            .filter_map(|item| {
                Some(VideoRecord {
                    video_id: item.id.video_id?,
                    title: item.snippet.title,
                    description: item.snippet.description,
                })
            })
            .collect();

        self.page_token = resp.next_page_token;
        if self.page_token.is_none() {
            self.done = true;
        }

        Ok(Some(page))
    }
}

/// Pick the first matching channel id out of a lookup response.
///
/// An empty item list means the handle is unknown or mistyped; that is
/// fatal for the run, there is no fallback handle.
fn first_channel_id(resp: ChannelListResponse, handle: &str) -> Result<String> {
    resp.items
        .into_iter()
        .next()
        .map(|channel| channel.id)
        .ok_or_else(|| CinemaxError::ChannelResolutionFailed {
            handle: handle.to_string(),
        })
}

/// Parse an ISO 8601 duration (PT1H30M45S) to total seconds.
///
/// Only the units YouTube emits are handled; a day component before the
/// time designator is tolerated.
pub fn parse_iso8601_duration(duration: &str) -> u64 {
    let mut seconds = 0;
    let mut current_num = String::new();
    let mut in_time = false;

    for c in duration.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
            continue;
        }
        if c == 'T' {
            in_time = true;
            current_num.clear();
            continue;
        }
        if let Ok(num) = current_num.parse::<u64>() {
            match c {
                'D' if !in_time => seconds += num * 86_400,
                'H' => seconds += num * 3_600,
                'M' if in_time => seconds += num * 60,
                'S' => seconds += num,
                _ => {}
            }
        }
        current_num.clear();
    }

    seconds
}

// YouTube API response structures

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: VideoSnippet,
    #[serde(rename = "contentDetails")]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    #[serde(rename = "categoryId")]
    category_id: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    duration: String,
}
