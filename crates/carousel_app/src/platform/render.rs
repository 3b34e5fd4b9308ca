use std::io::{self, Write};

use carousel_core::{AppViewModel, LoadStatus, Slide};

const BAR_WIDTH: usize = 40;
const CLOUD_WORDS_SHOWN: usize = 20;

/// Prints slides to stdout when they change, with a progress bar underneath.
pub struct TerminalRenderer {
    last_slide: Option<String>,
    last_seq: Option<u64>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            last_slide: None,
            last_seq: None,
        }
    }

    pub fn draw(&mut self, view: &AppViewModel) {
        let mut out = io::stdout().lock();

        if view.snapshot_seq.is_some() && view.snapshot_seq != self.last_seq {
            self.last_seq = view.snapshot_seq;
            let _ = writeln!(
                out,
                "\n[reviews updated {}]",
                chrono::Local::now().format("%H:%M:%S")
            );
        }

        let slide = slide_text(view);
        if self.last_slide.as_deref() != Some(slide.as_str()) {
            let _ = writeln!(out, "\n{slide}");
            self.last_slide = Some(slide);
        }

        let mut status = progress_bar(view.progress_percent, BAR_WIDTH);
        if view.refreshing {
            status.push_str(" refreshing...");
        }
        let _ = write!(out, "\r{status}");
        let _ = out.flush();
    }

    pub fn finish(&mut self) {
        let _ = writeln!(io::stdout());
    }
}

pub fn slide_text(view: &AppViewModel) -> String {
    let slide = match (&view.status, &view.slide) {
        (LoadStatus::Ready, Some(slide)) => slide,
        _ => {
            let mut text = if view.first_load {
                "Loading reviews...".to_string()
            } else {
                "Waiting for reviews to show...".to_string()
            };
            if let Some(err) = &view.last_error {
                text.push_str(&format!(" (last refresh failed: {err})"));
            }
            return text;
        }
    };

    match slide {
        Slide::Review(review) => format!(
            "{} ({}/5)\n  {}\n  - {}",
            stars(review.rating.value()),
            review.rating,
            review.content,
            review.author
        ),
        Slide::WordCloud(words) => {
            let listed: Vec<String> = words
                .iter()
                .take(CLOUD_WORDS_SHOWN)
                .map(|w| format!("{} ({:.0}pt)", w.word, w.font_size))
                .collect();
            format!("Top words in the latest ratings:\n  {}", listed.join(", "))
        }
        Slide::Distribution(dist) => {
            let mut text = format!(
                "{} {}/5\n  Based on the latest ratings",
                stars(dist.stars),
                dist.average
            );
            for bucket in &dist.buckets {
                text.push_str(&format!(
                    "\n  {} {:>4}  {}",
                    bucket.rating, bucket.count, bucket.color
                ));
            }
            text
        }
    }
}

fn stars(count: u8) -> String {
    "*".repeat(usize::from(count))
}

pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).floor() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        " ".repeat(width - filled.min(width)),
        percent
    )
}
