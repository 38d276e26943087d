// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use br_scrape::{
    scrape,
    specs::schedule,
    teams::{ResolverMode, TeamResolver},
};

/// A month-sized schedule page (~230 games) built from the active teams.
fn sample_month() -> String {
    let teams = TeamResolver::active_teams();
    let mut rows = String::new();
    for i in 0..230usize {
        let (v, _) = teams[i % teams.len()];
        let (h, _) = teams[(i * 7 + 3) % teams.len()];
        let day = i / 8 + 1;
        rows.push_str(&format!(
            "<tr><th><a href=\"/boxscores/x.html\">Fri, Jan {day}, 2021</a></th><td>7:00p</td>\
             <td><a href=\"/teams/A/2021.html\">{v}</a></td><td>{}</td>\
             <td><a href=\"/teams/B/2021.html\">{h}</a></td><td>{}</td>\
             <td><a href=\"/boxscores/y.html\">Box Score</a></td><td></td><td>18,000</td><td></td></tr>",
            95 + i % 30,
            100 + (i * 3) % 25,
        ));
    }
    format!(
        "<html><body><table id=\"schedule\"><thead><tr><th>Date</th><th>Start (ET)</th>\
         <th>Visitor/Neutral</th><th>PTS</th><th>Home/Neutral</th><th>PTS</th><th></th>\
         <th></th><th>Attend.</th><th>Notes</th></tr></thead><tbody>{rows}</tbody></table></body></html>"
    )
}

fn bench_normalize(c: &mut Criterion) {
    let doc = sample_month();
    let resolver = TeamResolver::new(ResolverMode::Merged);
    let table = schedule::parse_doc(&doc, "bench").expect("sample table");

    c.bench_function("schedule_extract", |b| {
        b.iter(|| {
            let t = schedule::parse_doc(black_box(&doc), "bench").expect("sample table");
            black_box(t.len())
        })
    });

    c.bench_function("schedule_normalize", |b| {
        b.iter(|| {
            let games = scrape::normalize(black_box(&table), &resolver).expect("resolves");
            black_box(games.len())
        })
    });

    c.bench_function("schedule_extract_and_normalize", |b| {
        b.iter(|| {
            let t = schedule::parse_doc(black_box(&doc), "bench").expect("sample table");
            black_box(scrape::normalize(&t, &resolver).map(|g| g.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
