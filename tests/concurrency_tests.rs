//! Concurrency and thread safety tests for termlink

mod common;

use std::sync::{Arc, Mutex, RwLock};
use std::thread;

use common::{FIELDS, full_annotations, glossary, source};
use termlink::{AnnotationScope, Glossary, annotate, load_dictionary};

#[test]
fn concurrent_annotation_over_shared_glossary() {
    let glossary = Arc::new(glossary());
    let expected: Vec<String> = FIELDS.iter().map(|f| glossary.annotate(f)).collect();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let glossary = Arc::clone(&glossary);
            thread::spawn(move || {
                FIELDS
                    .iter()
                    .map(|f| annotate(f, &glossary, None))
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        assert_eq!(results, expected, "Thread {i} produced different markup");
    }
}

#[test]
fn per_thread_scopes_do_not_interfere() {
    let glossary = Arc::new(glossary());
    let text = "Welk risico loopt een persoon? Noem elk risico.";

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let glossary = Arc::clone(&glossary);
            thread::spawn(move || {
                let mut scope = AnnotationScope::new();
                let first = annotate(text, &glossary, Some(&mut scope));
                let second = annotate(text, &glossary, Some(&mut scope));
                (full_annotations(&first), second, scope.len())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (annotated, second, scope_len) = handle.join().unwrap();
        assert_eq!(annotated, 2, "Thread {i} lost an annotation");
        assert_eq!(second, text, "Thread {i} re-annotated a seen term");
        assert_eq!(scope_len, 2);
    }
}

#[test]
fn concurrent_loads_build_identical_dictionaries() {
    let source = Arc::new(source());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || load_dictionary(&source).expect("load"))
        })
        .collect();

    let glossaries: Vec<Glossary> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first = &glossaries[0];
    for (i, other) in glossaries.iter().enumerate().skip(1) {
        assert_eq!(
            first.dictionary().stats(),
            other.dictionary().stats(),
            "Thread {i} built a different dictionary",
        );
        assert_eq!(first.annotate(FIELDS[2]), other.annotate(FIELDS[2]));
    }
}

#[test]
fn reload_swaps_the_whole_glossary() {
    let shared = Arc::new(RwLock::new(Arc::new(glossary())));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let seen = Arc::clone(&seen);
            thread::spawn(move || {
                for _ in 0..50 {
                    let current = Arc::clone(&shared.read().unwrap());
                    let html = current.annotate("Een risico.");
                    seen.lock().unwrap().push(html);
                }
            })
        })
        .collect();

    let replacement = load_dictionary(&termlink::DefinitionSource {
        definitions: vec![termlink::RawDefinition::new("risico", "Nieuwe uitleg.")],
        ..Default::default()
    })
    .expect("replacement loads");
    *shared.write().unwrap() = Arc::new(replacement);

    for reader in readers {
        reader.join().unwrap();
    }

    // Every rendering came from exactly one complete glossary.
    for html in seen.lock().unwrap().iter() {
        let old = html.contains("Een scenario dat een gebeurtenis");
        let new = html.contains("Nieuwe uitleg.");
        assert!(old ^ new, "mixed or missing definition: {html}");
    }
}
