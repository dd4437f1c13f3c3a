//! Download pipeline: page -> video ID -> base filename -> catalog ->
//! selection -> one download per track.
//!
//! Status goes to stdout for the user; failures are reported and the run
//! ends normally. A prompt that cannot be read counts as an empty answer.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use rtvesub_core::url::{build_output_filename, file_extension};
use rtvesub_core::{
    DownloadOutcome, ResolvedVideo, SubtitleError, SubtitleScraper, SubtitleTrack,
    language_name, parse_selection,
};
use tracing::warn;

use crate::prompt::{Prompter, is_overwrite};

const RULE: &str = "=====================================================";

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No page URL given
    NoUrl,
    /// Page could not be fetched or carried no video ID
    NoVideoId,
    /// The catalog was empty or unavailable
    NoSubtitles,
    /// The selection was empty or invalid
    NothingSelected,
    /// Every selected track was attempted
    Completed {
        saved: Vec<PathBuf>,
        skipped: Vec<PathBuf>,
        failed: usize,
    },
}

/// Run the whole pipeline once
pub async fn run<P: Prompter>(
    scraper: &SubtitleScraper,
    prompter: &mut P,
    url: Option<String>,
    output_dir: &Path,
) -> RunOutcome {
    println!("{RULE}");
    println!(" RTVE Subtitle Downloader (Smart Naming)");
    println!("{RULE}");

    let url = match url {
        Some(url) => url,
        None => prompter
            .read_line("Please enter the RTVE video page URL:\n> ")
            .unwrap_or_else(|e| {
                warn!("Could not read URL: {e}");
                String::new()
            }),
    };
    let url = url.trim();
    if url.is_empty() {
        println!("No URL entered. Exiting.");
        return RunOutcome::NoUrl;
    }

    println!("[1/4] Fetching video page to find Video ID and Title...");
    let video = match scraper.resolve(url).await {
        Ok(video) => video,
        Err(SubtitleError::VideoIdNotFound) => {
            println!("      -> Could not find a Video ID on the page.");
            println!("\nCould not proceed without a Video ID.");
            return RunOutcome::NoVideoId;
        }
        Err(e) => {
            println!("      -> Failed to fetch the page: {e}");
            println!("\nCould not proceed without a Video ID.");
            return RunOutcome::NoVideoId;
        }
    };
    println!("      -> Found Video ID: {}", video.video_id);
    println!("[2/4] Analyzing page for Title and Episode info...");
    println!("      -> Detected base filename: {}", video.base_filename);

    println!("[3/4] Querying the subtitles API...");
    let tracks = match scraper.fetch_subtitles(&video.video_id).await {
        Ok(tracks) => tracks,
        Err(e) => {
            warn!("Subtitle listing failed: {e}");
            if e.is_transport() {
                println!("      -> Failed to query the API.");
            } else {
                println!("      -> Could not parse the API response.");
            }
            Vec::new()
        }
    };

    if tracks.is_empty() {
        println!("\nNo subtitles found for this video.");
        return RunOutcome::NoSubtitles;
    }

    let selected = if tracks.len() == 1 {
        println!(
            "      -> Success! Found 1 subtitle: {}. Starting download directly.",
            tracks[0].lang.to_uppercase()
        );
        tracks
    } else {
        select_tracks(prompter, &tracks)
    };

    if selected.is_empty() {
        println!("\nNo subtitles selected. Exiting.");
        return RunOutcome::NothingSelected;
    }

    println!("\n[4/4] Preparing to download selected subtitles...");
    let outcome = download_all(scraper, prompter, &video, &selected, output_dir).await;

    println!("\n---------------------------------------------");
    println!("All tasks complete!");
    println!("---------------------------------------------");

    outcome
}

/// Show the numbered menu and read the user's choice
fn select_tracks<P: Prompter>(
    prompter: &mut P,
    tracks: &[SubtitleTrack],
) -> Vec<SubtitleTrack> {
    println!("\nMultiple languages found. Please choose which to download:");
    for (i, track) in tracks.iter().enumerate() {
        println!("  {}. {}", i + 1, language_name(&track.lang));
    }

    let answer = match prompter.read_line(
        "Enter the number(s) separated by commas (e.g., 1,3), or 'all' to download all:\n> ",
    ) {
        Ok(answer) => answer,
        Err(e) => {
            warn!("Could not read selection: {e}");
            return Vec::new();
        }
    };

    match parse_selection(&answer, tracks.len()) {
        Ok(selection) => {
            for n in &selection.rejected {
                println!("Warning: '{n}' is not a valid choice.");
            }
            selection.apply(tracks)
        }
        Err(e) => {
            warn!("{e}");
            println!("Invalid input. Please enter numbers, commas, or 'all'.");
            Vec::new()
        }
    }
}

/// Download every selected track; one failure never stops the rest
async fn download_all<P: Prompter>(
    scraper: &SubtitleScraper,
    prompter: &mut P,
    video: &ResolvedVideo,
    selected: &[SubtitleTrack],
    output_dir: &Path,
) -> RunOutcome {
    // The first track's extension names every file
    let extension = selected
        .first()
        .map(|track| file_extension(&track.src))
        .unwrap_or_default();

    let mut saved = Vec::new();
    let mut skipped = Vec::new();
    let mut failed = 0;

    for (i, track) in selected.iter().enumerate() {
        let filename = build_output_filename(&video.base_filename, &track.lang, &extension);
        let target = output_dir.join(&filename);

        println!(
            "\nProcessing [{}/{}]: Language {}",
            i + 1,
            selected.len(),
            track.lang.to_uppercase()
        );
        println!("      -> Downloading: {filename}");

        let result = scraper
            .download(
                video,
                track,
                &target,
                |path| {
                    let prompt = format!(
                        "[WARNING] File '{}' exists. (O)verwrite or (S)kip? ",
                        path.display()
                    );
                    match prompter.read_line(&prompt) {
                        Ok(answer) => is_overwrite(&answer),
                        Err(e) => {
                            warn!("Could not read overwrite answer: {e}");
                            false
                        }
                    }
                },
                |total| progress_bar(&filename, total),
            )
            .await;

        match result {
            Ok(DownloadOutcome::Saved { path, .. }) => {
                println!("      -> Successfully saved '{filename}'");
                saved.push(path);
            }
            Ok(DownloadOutcome::Skipped { path }) => {
                println!("      -> Skipping file.");
                skipped.push(path);
            }
            Err(e) => {
                println!("\n[ERROR] Download failed for this file: {e}");
                failed += 1;
            }
        }
    }

    RunOutcome::Completed {
        saved,
        skipped,
        failed,
    }
}

fn progress_bar(filename: &str, total: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{msg} {percent:>3}%|{bar:40.green}| {bytes}/{total_bytes} [{elapsed}<{eta}, {bytes_per_sec}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar());

    let progress = ProgressBar::new(total);
    progress.set_style(style);
    progress.set_message(filename.to_string());
    progress
}
