// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_shadow_styles`.

use core::convert::Infallible;
use std::rc::Rc;
use std::{string::String, vec::Vec};

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_shadow_styles::{
    AdoptedStyleSheetsStyles, CssSource, ShadowDomOptions, ShadowDomStyles,
    ShadowDomStylesFactory, StyleCapabilities, StyleElementStyles, StyleHost, StyleSheetCache,
};

/// Host whose "compilation" copies the text into a shared allocation.
#[derive(Clone, Copy)]
struct BenchHost;

#[derive(Default)]
struct BenchRoot {
    adopted: Vec<Rc<str>>,
    nodes: Vec<String>,
}

impl StyleHost for BenchHost {
    type StyleSheet = Rc<str>;
    type StyleElement = String;
    type ShadowRoot = BenchRoot;
    type Error = Infallible;

    fn capabilities(&self) -> StyleCapabilities {
        StyleCapabilities::all()
    }

    fn compile_style_sheet(&self, css: &str) -> Result<Rc<str>, Infallible> {
        Ok(Rc::from(css))
    }

    fn set_adopted_style_sheets(
        &self,
        root: &mut BenchRoot,
        sheets: &[Rc<str>],
    ) -> Result<(), Infallible> {
        root.adopted.clear();
        root.adopted.extend_from_slice(sheets);
        Ok(())
    }

    fn create_style_element(&self, css: &str) -> Result<String, Infallible> {
        Ok(css.into())
    }

    fn append_style_element(&self, root: &mut BenchRoot, element: String) -> Result<(), Infallible> {
        root.nodes.push(element);
        Ok(())
    }
}

fn css_texts(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| format!(".c{i}{{color:#{:06x};padding:{i}px}}", i * 4099))
        .collect()
}

fn bench_cache(c: &mut Criterion) {
    let texts = css_texts(64);

    let mut group = c.benchmark_group("shadow_styles/cache");
    group.bench_function("cold", |b| {
        b.iter_batched(
            StyleSheetCache::<Rc<str>>::new,
            |mut cache| {
                for css in &texts {
                    black_box(cache.resolve(&BenchHost, css).unwrap());
                }
                cache
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("warm", |b| {
        let mut cache = StyleSheetCache::new();
        for css in &texts {
            cache.resolve(&BenchHost, css).unwrap();
        }
        b.iter(|| {
            for css in &texts {
                black_box(cache.resolve(&BenchHost, css).unwrap());
            }
        });
    });
    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("shadow_styles/apply");
    for depth in [1_usize, 4, 16] {
        let mut cache = StyleSheetCache::new();
        let mut shared: Option<Rc<ShadowDomStyles<BenchHost>>> = None;
        for level in 0..depth {
            let sources = css_texts(4)
                .into_iter()
                .map(|css| CssSource::from(format!("{css}/*{level}*/")));
            let styles = AdoptedStyleSheetsStyles::new(BenchHost, sources, &mut cache, shared)
                .unwrap();
            shared = Some(Rc::new(styles.into()));
        }
        let leaf = shared.unwrap();
        group.bench_function(BenchmarkId::new("adopted_chain", depth), |b| {
            let mut root = BenchRoot::default();
            b.iter(|| {
                leaf.apply_to(&mut root).unwrap();
                black_box(root.adopted.len())
            });
        });
    }

    let elements = StyleElementStyles::new(BenchHost, css_texts(8), None);
    group.bench_function("style_elements", |b| {
        b.iter_batched(
            BenchRoot::default,
            |mut root| {
                elements.apply_to(&mut root).unwrap();
                root
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_factory(c: &mut Criterion) {
    let options = ShadowDomOptions::new().shared_styles_from(css_texts(4));
    let locals = css_texts(16);

    c.bench_function("shadow_styles/factory/create_styles", |b| {
        let mut factory = ShadowDomStylesFactory::new(BenchHost, &options).unwrap();
        let mut i = 0_usize;
        b.iter(|| {
            let start = i % locals.len();
            i += 1;
            let sources = locals[start..]
                .iter()
                .take(2)
                .map(|css| CssSource::from(css.as_str()));
            black_box(factory.create_styles(sources).unwrap())
        });
    });
}

criterion_group!(benches, bench_cache, bench_apply, bench_factory);
criterion_main!(benches);
