use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use yambook_core::{Converter, Document, ExtractConfig, GenerateConfig, extract_bookmarks, from_yaml, generate, to_yaml};

/// Builds a bookmark file with `folders` folders of `links` links each.
fn synthetic_html(folders: usize, links: usize) -> String {
    let mut html = String::from("<DL><p>\n");
    for f in 0..folders {
        html.push_str(&format!("    <DT><H3>Folder {}</H3>\n    <DL><p>\n", f));
        for l in 0..links {
            html.push_str(&format!(
                "        <DT><A HREF=\"https://example.com/{}/{}\" TAGS=\"a,b\">Link {} of {}</A>\n",
                f, l, l, f
            ));
        }
        html.push_str("    </DL><p>\n");
    }
    html.push_str("</DL><p>\n");
    html
}

fn bench_extract(c: &mut Criterion) {
    let chrome = std::fs::read_to_string("../../tests/fixtures/chrome.html").unwrap();
    let large = synthetic_html(100, 50);

    let mut group = c.benchmark_group("extract");

    group.bench_with_input(BenchmarkId::new("chrome", "fixture"), &chrome, |b, html| {
        b.iter(|| extract_bookmarks(&Document::parse(black_box(html)), &ExtractConfig::default()))
    });

    group.bench_with_input(BenchmarkId::new("synthetic", "5000 links"), &large, |b, html| {
        b.iter(|| extract_bookmarks(&Document::parse(black_box(html)), &ExtractConfig::default()))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let forest = Converter::new().html_to_forest(&synthetic_html(100, 50));
    let config = GenerateConfig::default();

    c.bench_function("generate", |b| b.iter(|| generate(black_box(&forest), &config)));
}

fn bench_yaml(c: &mut Criterion) {
    let forest = Converter::new().html_to_forest(&synthetic_html(100, 50));
    let yaml = to_yaml(&forest).unwrap();

    c.bench_function("to_yaml", |b| b.iter(|| to_yaml(black_box(&forest))));
    c.bench_function("from_yaml", |b| b.iter(|| from_yaml(black_box(&yaml))));
}

criterion_group!(benches, bench_extract, bench_generate, bench_yaml);
criterion_main!(benches);
