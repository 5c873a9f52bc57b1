use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lockbox_algorithms::block::BlockCipher;
use lockbox_algorithms::{base64, derive_key, Aes256, Cbc, KeySchedule, LegacyAes256};
use lockbox_engine::{Engine, EngineConfig, KeyMaterial};

fn bench_key_schedule(c: &mut Criterion) {
    let key = [0x42u8; 32];
    c.bench_function("AES-256 key expansion", |b| {
        b.iter(|| KeySchedule::expand(black_box(&key)).unwrap())
    });
}

fn bench_block(c: &mut Criterion) {
    bench_block_cipher(c, &LegacyAes256::new(&[0x42u8; 32]).unwrap());
    bench_block_cipher(c, &Aes256::new(&[0x42u8; 32]).unwrap());
}

fn bench_block_cipher<B: BlockCipher>(c: &mut Criterion, cipher: &B) {
    let mut group = c.benchmark_group(format!("{} block", B::name()));
    group.throughput(Throughput::Bytes(16));

    group.bench_function("encrypt", |b| {
        let mut block = [0u8; 16];
        b.iter(|| cipher.encrypt_block(black_box(&mut block)))
    });
    group.bench_function("decrypt", |b| {
        let mut block = [0u8; 16];
        b.iter(|| cipher.decrypt_block(black_box(&mut block)))
    });

    group.finish();
}

fn bench_cbc(c: &mut Criterion) {
    let cipher = LegacyAes256::new(&[0x42u8; 32]).unwrap();
    let iv = [0u8; 16];
    let mut group = c.benchmark_group("AES-256-CBC (legacy rounds)");

    for size in [16usize, 256, 1024, 16384] {
        let data = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt_padded", size), &data, |b, data| {
            let cbc = Cbc::new(&cipher, &iv).unwrap();
            b.iter(|| cbc.encrypt_padded(black_box(data)).unwrap())
        });

        let sealed = Cbc::new(&cipher, &iv).unwrap().encrypt_padded(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("decrypt_padded", size), &sealed, |b, sealed| {
            let cbc = Cbc::new(&cipher, &iv).unwrap();
            b.iter(|| cbc.decrypt_padded(black_box(sealed)).unwrap())
        });
    }

    group.finish();
}

fn bench_base64(c: &mut Criterion) {
    let data = vec![0xa5u8; 1024];
    let encoded = base64::encode(&data);
    let mut group = c.benchmark_group("Base64");
    group.throughput(Throughput::Bytes(1024));

    group.bench_function("encode", |b| b.iter(|| base64::encode(black_box(&data))));
    group.bench_function("decode", |b| {
        b.iter(|| base64::decode(black_box(&encoded)).unwrap())
    });

    group.finish();
}

fn bench_kdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("Key derivation");
    group.sample_size(10);

    for iterations in [1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &iterations, |b, &n| {
            b.iter(|| derive_key(b"password", &[0u8; 16], n, 48).unwrap())
        });
    }

    group.finish();
}

fn bench_engine(c: &mut Criterion) {
    let material = KeyMaterial::new([0x42; 32], [0x24; 16]);
    let mut group = c.benchmark_group("Engine");

    for (name, config) in [
        ("per_message", EngineConfig::default()),
        ("fixed", EngineConfig::legacy()),
    ] {
        let engine = Engine::with_material(config, material.clone()).unwrap();
        let sealed = engine.encrypt("correct horse battery staple").unwrap();

        group.bench_function(BenchmarkId::new("encrypt", name), |b| {
            b.iter(|| engine.encrypt(black_box("correct horse battery staple")).unwrap())
        });
        group.bench_function(BenchmarkId::new("decrypt", name), |b| {
            b.iter(|| engine.decrypt(black_box(&sealed)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_key_schedule,
    bench_block,
    bench_cbc,
    bench_base64,
    bench_kdf,
    bench_engine
);
criterion_main!(benches);
