//! Benchmarks for the virtualized menu render path.
//!
//! Run with: cargo bench -p pickmenu-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pickmenu_core::{
    HeadingIndex, MenuOptions, MenuSession, OptionGroup, Rect, SelectOption, flatten_rows,
};
use pickmenu_widgets::{Buffer, MenuList, MenuListState, StatefulWidget};
use std::hint::black_box;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    label: String,
}

impl SelectOption for Item {
    fn label(&self) -> &str {
        &self.label
    }
}

fn grouped(option_count: usize, group_size: usize) -> MenuOptions<Item> {
    let groups = (0..option_count.div_ceil(group_size))
        .map(|g| {
            let options = (0..group_size.min(option_count - g * group_size))
                .map(|i| Item {
                    label: format!("option {}", g * group_size + i),
                })
                .collect();
            OptionGroup::new(format!("group {g}"), options)
        })
        .collect();
    MenuOptions::Grouped(groups)
}

fn bench_menu_list_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("widget/menu_list");
    let session = MenuSession::new(true);

    for count in [1_000usize, 10_000, 100_000] {
        let options = grouped(count, 50);
        let rows = flatten_rows(&options);
        let headings = HeadingIndex::scan(&rows);
        let value: Vec<Item> = Vec::new();

        let area = Rect::from_size(40, 24);
        let mut buf = Buffer::new(40, 24);
        let mut state = MenuListState::default();
        state.scroll_offset = (count / 2) as u32;

        group.bench_with_input(BenchmarkId::new("render", count), &(), |b, _| {
            b.iter(|| {
                buf.clear();
                let list = MenuList::new(&rows, &headings, &value, &session);
                list.render(area, &mut buf, &mut state);
                black_box(&buf);
            })
        });
    }

    group.finish();
}

fn bench_flatten_and_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/flatten");

    for count in [1_000usize, 10_000] {
        let options = grouped(count, 50);
        group.bench_with_input(BenchmarkId::new("flatten_scan", count), &(), |b, _| {
            b.iter(|| {
                let rows = flatten_rows(&options);
                let headings = HeadingIndex::scan(&rows);
                black_box((rows.len(), headings.len()));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_menu_list_render, bench_flatten_and_scan);
criterion_main!(benches);
