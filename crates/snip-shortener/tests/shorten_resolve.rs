use parking_lot::Mutex;
use snip_core::{GeneratorError, LinkStore, ResolveError, Resolver, ShortCode, Shortener};
use snip_generator::{Generator, RandomGenerator, RandomGeneratorSettings};
use snip_redirector::ResolverService;
use snip_shortener::ShortenerService;
use snip_storage::InMemoryLinkStore;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Barrier};
use std::thread;

struct FixedGenerator {
    codes: Mutex<VecDeque<&'static str>>,
}

impl Generator for FixedGenerator {
    type Output = ShortCode;

    fn generate(&self) -> Result<ShortCode, GeneratorError> {
        self.codes
            .lock()
            .pop_front()
            .map(ShortCode::new_unchecked)
            .ok_or_else(|| GeneratorError::EntropyUnavailable("no more codes".into()))
    }
}

fn random_services() -> (
    Arc<InMemoryLinkStore>,
    ShortenerService<InMemoryLinkStore, RandomGenerator>,
    ResolverService<InMemoryLinkStore>,
) {
    let store = Arc::new(InMemoryLinkStore::new());
    let generator = RandomGenerator::new(RandomGeneratorSettings::default()).unwrap();
    let shortener = ShortenerService::new(Arc::clone(&store), generator);
    let resolver = ResolverService::new(Arc::clone(&store));
    (store, shortener, resolver)
}

#[test]
fn example_scenario() {
    let store = Arc::new(InMemoryLinkStore::new());
    let generator = FixedGenerator {
        codes: Mutex::new(VecDeque::from(["Ab3dEf12"])),
    };
    let shortener = ShortenerService::new(Arc::clone(&store), generator);
    let resolver = ResolverService::new(store);

    let code = shortener.shorten("https://example.com/a").unwrap();
    assert_eq!(code.as_str(), "Ab3dEf12");

    let again = shortener.shorten("https://example.com/a").unwrap();
    assert_eq!(again.as_str(), "Ab3dEf12");

    assert_eq!(
        resolver.resolve("Ab3dEf12").unwrap().long_url,
        "https://example.com/a"
    );
    assert_eq!(
        resolver.resolve("zzzzzzzz").unwrap_err(),
        ResolveError::NotFound("zzzzzzzz".to_string())
    );
}

#[test]
fn round_trip_and_uniqueness() {
    let (store, shortener, resolver) = random_services();
    let urls: Vec<String> = (0..200)
        .map(|i| format!("https://example.com/page/{i}"))
        .collect();

    let mut codes = HashMap::new();
    for url in &urls {
        let code = shortener.shorten(url).unwrap();
        assert_eq!(resolver.resolve(code.as_str()).unwrap().long_url, *url);
        codes.insert(code, url.clone());
    }

    assert_eq!(codes.len(), urls.len());
    assert_eq!(store.len().unwrap(), urls.len());
}

#[test]
fn concurrent_shorten_of_same_url_creates_one_record() {
    const THREADS: usize = 16;

    let (store, shortener, resolver) = random_services();
    let shortener = Arc::new(shortener);
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shortener = Arc::clone(&shortener);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                shortener.shorten("https://example.com/contended").unwrap()
            })
        })
        .collect();

    let codes: HashSet<ShortCode> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(codes.len(), 1);
    assert_eq!(store.len().unwrap(), 1);
    let code = codes.into_iter().next().unwrap();
    assert_eq!(
        resolver.resolve(code.as_str()).unwrap().long_url,
        "https://example.com/contended"
    );
}

#[test]
fn concurrent_shorten_and_resolve() {
    const WRITERS: usize = 8;
    const URLS_PER_WRITER: usize = 50;

    let (store, shortener, resolver) = random_services();
    let shortener = Arc::new(shortener);
    let barrier = Arc::new(Barrier::new(WRITERS * 2));

    let mut writers = Vec::new();
    let mut readers = Vec::new();
    for w in 0..WRITERS {
        let shortener = Arc::clone(&shortener);
        let writer_barrier = Arc::clone(&barrier);
        writers.push(thread::spawn(move || {
            writer_barrier.wait();
            // every writer shortens the same shared URLs plus its own
            (0..URLS_PER_WRITER)
                .map(|i| {
                    let url = if i % 2 == 0 {
                        format!("https://shared.example/{i}")
                    } else {
                        format!("https://writer{w}.example/{i}")
                    };
                    let code = shortener.shorten(&url).unwrap();
                    (url, code)
                })
                .collect::<Vec<_>>()
        }));

        let resolver = resolver.clone();
        let reader_barrier = Arc::clone(&barrier);
        readers.push(thread::spawn(move || {
            reader_barrier.wait();
            for _ in 0..URLS_PER_WRITER {
                assert!(resolver.resolve("zzzzzzzz").is_err());
            }
        }));
    }

    let mut by_url: HashMap<String, ShortCode> = HashMap::new();
    for handle in writers {
        for (url, code) in handle.join().unwrap() {
            let previous = by_url.entry(url).or_insert_with(|| code.clone());
            assert_eq!(*previous, code);
        }
    }
    for handle in readers {
        handle.join().unwrap();
    }

    let shared = URLS_PER_WRITER / 2;
    let own = URLS_PER_WRITER - shared;
    assert_eq!(by_url.len(), shared + WRITERS * own);
    assert_eq!(store.len().unwrap(), by_url.len());
    for (url, code) in &by_url {
        assert_eq!(resolver.resolve(code.as_str()).unwrap().long_url, *url);
    }
}
