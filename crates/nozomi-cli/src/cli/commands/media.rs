//! `nozomi media` – resolve one media file URL.

use nozomi_core::{create_media_filepath, MediaMetaData};

use super::Resolved;

pub fn run_media(dataid: &str, media_type: &str, is_video: bool) -> Vec<Resolved> {
    let media = MediaMetaData {
        dataid: dataid.to_string(),
        is_video,
        media_type: media_type.to_string(),
        ..MediaMetaData::default()
    };
    vec![Resolved::new(dataid, create_media_filepath(&media))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_and_video() {
        assert_eq!(
            run_media("abcde", "gif", false)[0].url,
            "https://g.nozomi.la/e/d/abcde.gif"
        );
        assert_eq!(
            run_media("abcde", "mp4", true)[0].url,
            "https://v.nozomi.la/e/d/abcde.mp4"
        );
    }
}
