use criterion::{Criterion, black_box, criterion_group, criterion_main};
use shroud_core::{AlphabetRegistry, Shroud, derive_rng, sign};

fn bench_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream");
    let alphabet = AlphabetRegistry::builtin().get("ascii").expect("builtin");
    let mut rng = derive_rng(b"bench-stream");
    let key = alphabet.token_with_rng(64, &mut rng);
    let text = alphabet.token_with_rng(4096, &mut rng);
    let mut cipher = Shroud::new("ascii", &key).expect("cipher");
    group.bench_function("encode-4k", |b| {
        b.iter(|| {
            let _ = cipher.encode(black_box(&text)).expect("encode");
        })
    });
    let ciphertext = cipher.encode(&text).expect("encode");
    group.bench_function("decode-4k", |b| {
        b.iter(|| {
            let _ = cipher.decode(black_box(&ciphertext)).expect("decode");
        })
    });
}

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding");
    let alphabet = AlphabetRegistry::builtin().get("alphanum").expect("builtin");
    let mut rng = derive_rng(b"bench-padding");
    let key = alphabet.token_with_rng(32, &mut rng);
    let text = alphabet.token_with_rng(256, &mut rng);
    let mut cipher = Shroud::new("alphanum", &key).expect("cipher");
    group.bench_function("wencode-256-to-1k", |b| {
        b.iter(|| {
            let _ = cipher
                .wencode_with_rng(black_box(&text), 1024, &mut rng)
                .expect("wencode");
        })
    });
    let padded = cipher
        .wencode_with_rng(&text, 1024, &mut rng)
        .expect("wencode");
    group.bench_function("wdecode-1k", |b| {
        b.iter(|| {
            let _ = cipher.wdecode(black_box(&padded)).expect("wdecode");
        })
    });
}

fn bench_token(c: &mut Criterion) {
    let mut group = c.benchmark_group("token");
    let alphabet = AlphabetRegistry::builtin().get("asciiext").expect("builtin");
    let mut rng = derive_rng(b"bench-token");
    group.bench_function("asciiext-64", |b| {
        b.iter(|| {
            let _ = alphabet.token_with_rng(black_box(64), &mut rng);
        })
    });
}

fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("signature");
    let alphabet = AlphabetRegistry::builtin().get("ascii").expect("builtin");
    let mut rng = derive_rng(b"bench-signature");
    let text = alphabet.token_with_rng(4096, &mut rng);
    group.bench_function("sign-4k", |b| {
        b.iter(|| {
            let _ = sign(black_box(&text));
        })
    });
}

criterion_group!(
    benches,
    bench_stream,
    bench_padding,
    bench_token,
    bench_signature
);
criterion_main!(benches);
