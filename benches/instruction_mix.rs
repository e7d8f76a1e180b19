use criterion::{black_box, criterion_group, criterion_main, Criterion};
use instmix::{
    compute_instruction_mix, BasicBlockBuilder, EdgeHintBias, Frequency, Function, Opcode,
    ProfileCounts,
};

/// A chain of diamonds: each link tests, splits hot/cold, and merges. Gives
/// the profiler a realistic spread of buckets and plenty of blocks.
fn diamond_chain(links: usize) -> (Function, ProfileCounts) {
    let mut func = Function::new("diamond_chain");
    let mut counts = ProfileCounts::new();

    let entry = func.add_block();
    counts.set(entry, 1);

    let mut builder = BasicBlockBuilder::new(&mut func, entry);
    builder.append(Opcode::Alloca);

    for i in 0..links {
        let hot = builder.func.add_block();
        let cold = builder.func.add_block();
        let merge = builder.func.add_block();

        builder.append(Opcode::Load);
        builder.append(Opcode::ICmp);
        builder.branch(hot, (cold, Frequency::Rare));

        builder.switch_to_block(hot);
        builder.append(Opcode::Add);
        builder.append(Opcode::FMul);
        builder.append(Opcode::Store);
        builder.jump(merge);

        builder.switch_to_block(cold);
        builder.append(Opcode::Call);
        builder.jump(merge);

        builder.switch_to_block(merge);

        counts.set(hot, 1000 + i as u64);
        counts.set(cold, 1);
        counts.set(merge, 1001 + i as u64);
    }

    builder.ret();

    (func, counts)
}

fn bench_instruction_mix(c: &mut Criterion) {
    let (func, counts) = diamond_chain(1000);
    let bias = EdgeHintBias::new(&func);

    c.bench_function("instruction_mix/diamond_chain_1000", |b| {
        b.iter(|| {
            black_box(compute_instruction_mix(
                black_box(&func),
                black_box(&counts),
                black_box(&bias),
            ))
        })
    });

    c.bench_function("instruction_mix/edge_hint_bias_1000", |b| {
        b.iter(|| black_box(EdgeHintBias::new(black_box(&func))))
    });
}

criterion_group!(benches, bench_instruction_mix);
criterion_main!(benches);
