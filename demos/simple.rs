use char_freq::analyze_text;

fn main() {
    env_logger::init();

    let text = "간장 공장 공장장은 강 공장장이고. 된장 공장 공장장은 공 공장장이다.";

    let analysis = analyze_text(text);

    println!("Character frequencies for the given text \"{}\"", text);
    for (ch, count) in analysis.top(5) {
        println!("{}: {}", ch, count);
    }
}
