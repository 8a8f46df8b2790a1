//! Plain-text rendering of the pipeline's view models.

use tfind_pipeline::{DetailState, DetailWebPresenter, MapPresenter, SearchSession, TheaterRow};

pub(crate) fn session(session: &SearchSession) -> String {
    text(vec![format!(
        "search {} completed {} within {:.0} m of {}",
        session.token,
        session.completed_at.format("%Y-%m-%d %H:%M:%S UTC"),
        session.radius_meters,
        session.center,
    )])
}

pub(crate) fn map(map: &MapPresenter) -> String {
    let mut lines = Vec::new();
    if let Some(region) = map.region() {
        lines.push(format!(
            "map: centered on {} ({:.0} m x {:.0} m, {:.4}° x {:.4}°)",
            region.center,
            region.latitudinal_meters,
            region.longitudinal_meters,
            region.latitude_delta(),
            region.longitude_delta(),
        ));
    }
    lines.extend(map.markers().iter().enumerate().map(|(i, marker)| {
        format!(
            "  [{}] {} ({}) @ {}",
            i + 1,
            marker.title,
            marker.subtitle,
            marker.coordinate
        )
    }));
    text(lines)
}

pub(crate) fn rows(rows: &[TheaterRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (i, row) in rows.iter().enumerate() {
        lines.push(format!("{:>3}. [{}] {}", i + 1, row.logo, row.name));
        lines.push(format!("     {}", row.address));
    }
    text(lines)
}

pub(crate) fn detail(detail: &DetailWebPresenter) -> String {
    let states: Vec<&str> = detail.transitions().iter().map(|s| state_name(*s)).collect();
    let mut lines = vec![
        format!("states: {}", states.join(" -> ")),
        format!("status: {}", detail.status_text()),
    ];
    if let Some(page) = detail.page() {
        lines.push(format!("page:   {} ({} bytes)", page.url, page.bytes));
        if let Some(title) = &page.title {
            lines.push(format!("title:  {title}"));
        }
    }
    text(lines)
}

fn state_name(state: DetailState) -> &'static str {
    match state {
        DetailState::Idle => "Idle",
        DetailState::Loading => "Loading",
        DetailState::Loaded => "Loaded",
    }
}

/// One output line per entry, each newline-terminated.
fn text(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
