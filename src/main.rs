use instmix::{
    compute_instruction_mix, BasicBlockBuilder, EdgeHintBias, Frequency, MixReport, Opcode,
    ProfileCounts,
};

/// Builds a loop that sums a float array: a header test, a body doing the
/// address math and accumulation, and an exit. The profile says the body runs
/// a thousand times per entry.
fn sum_loop() -> (instmix::Function, ProfileCounts) {
    let mut func = instmix::Function::new("sum_loop");

    let entry = func.add_block();
    let header = func.add_block();
    let body = func.add_block();
    let exit = func.add_block();

    let mut builder = BasicBlockBuilder::new(&mut func, entry);
    builder.append(Opcode::Alloca);
    builder.append(Opcode::Store);
    builder.jump(header);

    builder.switch_to_block(header);
    builder.append(Opcode::Load);
    builder.append(Opcode::ICmp);
    builder.branch(body, (exit, Frequency::Rare));

    builder.switch_to_block(body);
    builder.append(Opcode::GetElementPtr);
    builder.append(Opcode::Load);
    builder.append(Opcode::FAdd);
    builder.append(Opcode::Add);
    builder.append(Opcode::Store);
    builder.jump(header);

    builder.switch_to_block(exit);
    builder.append(Opcode::Load);
    builder.ret();

    let counts = [(entry, 1), (header, 1001), (body, 1000), (exit, 1)]
        .into_iter()
        .collect();

    (func, counts)
}

fn main() {
    let (func, counts) = sum_loop();
    let bias = EdgeHintBias::new(&func);

    println!("{}", func);

    println!("{}", MixReport::csv_header());
    println!("{}", compute_instruction_mix(&func, &counts, &bias));
}
