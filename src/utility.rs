use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for a contraction over `len` vertices. The length may be
/// reset later by the job itself.
pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(
            " {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
