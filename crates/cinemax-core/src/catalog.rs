use std::collections::HashMap;

use crate::extract::{clean_title, extract_stars, summarize_description};
use crate::types::{Catalog, Clip, Movie, VideoDetail, VideoRecord};

/// Outcome of classifying one listed video against its detail record.
#[derive(Debug)]
pub enum Classified {
    Movie(Movie),
    Clip(Clip),
}

/// Classify a single video.
///
/// Runtime below `min_movie_minutes` (integer minutes, floored) marks the
/// video as a clip; everything else becomes a normalized movie record.
pub fn classify_video(
    video: &VideoRecord,
    detail: &VideoDetail,
    stoplist: &[&str],
    min_movie_minutes: u64,
) -> Classified {
    let duration_minutes = detail.duration_seconds / 60;
    let title = clean_title(&video.title);

    if duration_minutes < min_movie_minutes {
        return Classified::Clip(Clip {
            title,
            duration_minutes,
        });
    }

    Classified::Movie(Movie {
        title,
        category: detail.category.clone(),
        stars: extract_stars(&video.title, &detail.description, stoplist),
        duration_minutes,
        description: summarize_description(&detail.description),
    })
}

/// Partition the listed videos into movies and clips, preserving listing
/// order. Videos with no detail entry are silently skipped.
pub fn build_catalog(
    videos: &[VideoRecord],
    details: &HashMap<String, VideoDetail>,
    stoplist: &[&str],
    min_movie_minutes: u64,
) -> Catalog {
    let mut catalog = Catalog::default();

    for video in videos {
        let Some(detail) = details.get(&video.video_id) else {
            continue;
        };
        match classify_video(video, detail, stoplist, min_movie_minutes) {
            Classified::Movie(movie) => catalog.movies.push(movie),
            Classified::Clip(clip) => catalog.clips.push(clip),
        }
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MIN_MOVIE_MINUTES;
    use crate::extract::DEFAULT_STOPLIST;

    fn record(id: &str, title: &str) -> VideoRecord {
        VideoRecord {
            video_id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
        }
    }

    fn detail(duration_seconds: u64, description: &str) -> VideoDetail {
        VideoDetail {
            duration_seconds,
            category: "24".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn full_movie_is_normalized() {
        let video = record("v1", "Aye Ife - Latest Yoruba Movie 2023 Starring Bola Aina");
        let detail = detail(5400, "A romantic drama.\nStarring Bola Aina and Kemi Afolabi.\n\n\n");

        let Classified::Movie(movie) =
            classify_video(&video, &detail, DEFAULT_STOPLIST, DEFAULT_MIN_MOVIE_MINUTES)
        else {
            panic!("expected a movie");
        };

        assert_eq!(movie.title, "Aye Ife");
        assert_eq!(movie.duration_minutes, 90);
        assert_eq!(movie.category, "24");
        assert!(movie.stars.contains(&"Bola Aina".to_string()));
        assert!(movie.stars.contains(&"Kemi Afolabi".to_string()));
        assert!(!movie.stars.iter().any(|s| s.contains("Latest")));
        assert!(!movie.stars.iter().any(|s| s.contains("Yoruba")));
        assert!(!movie.stars.iter().any(|s| s.contains("Movie")));
        assert_eq!(
            movie.description,
            "A romantic drama. Starring Bola Aina and Kemi Afolabi."
        );
    }

    #[test]
    fn short_video_becomes_a_clip() {
        let video = record("v1", "Aye Ife - Official Trailer");
        let detail = detail(600, "Coming soon.");

        let Classified::Clip(clip) =
            classify_video(&video, &detail, DEFAULT_STOPLIST, DEFAULT_MIN_MOVIE_MINUTES)
        else {
            panic!("expected a clip");
        };

        assert_eq!(clip.title, "Aye Ife");
        assert_eq!(clip.duration_minutes, 10);
    }

    #[test]
    fn minutes_are_floored() {
        let video = record("v1", "Almost A Movie");
        // 14 min 59 s floors to 14, still below the threshold
        let detail = detail(899, "");
        assert!(matches!(
            classify_video(&video, &detail, DEFAULT_STOPLIST, DEFAULT_MIN_MOVIE_MINUTES),
            Classified::Clip(_)
        ));

        let detail = VideoDetail {
            duration_seconds: 900,
            ..detail
        };
        assert!(matches!(
            classify_video(&video, &detail, DEFAULT_STOPLIST, DEFAULT_MIN_MOVIE_MINUTES),
            Classified::Movie(_)
        ));
    }

    #[test]
    fn catalog_preserves_order_and_skips_missing_details() {
        let videos = vec![
            record("new", "Aye Ife - Latest"),
            record("gone", "Deleted Upload"),
            record("old", "Owo Eje - Latest"),
        ];
        let mut details = HashMap::new();
        details.insert("new".to_string(), detail(5400, ""));
        details.insert("old".to_string(), detail(6000, ""));

        let catalog = build_catalog(&videos, &details, DEFAULT_STOPLIST, DEFAULT_MIN_MOVIE_MINUTES);

        let titles: Vec<_> = catalog.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Aye Ife", "Owo Eje"]);
        assert!(catalog.clips.is_empty());
    }

    #[test]
    fn empty_description_gets_defaults() {
        let video = record("v1", "Aye Ife");
        let detail = detail(5400, "");

        let Classified::Movie(movie) =
            classify_video(&video, &detail, DEFAULT_STOPLIST, DEFAULT_MIN_MOVIE_MINUTES)
        else {
            panic!("expected a movie");
        };

        assert_eq!(movie.description, "No description");
        assert_eq!(movie.stars, vec!["Aye Ife"]);
    }
}
