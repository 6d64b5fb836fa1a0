extern crate clap;
use clap::*;

mod cmd;

fn main() -> anyhow::Result<()> {
    let app = Command::new("norf")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Nucleotide Open Reading Frames")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd::find::make_subcommand())
        .subcommand(cmd::rc::make_subcommand())
        .subcommand(cmd::tsv::make_subcommand())
        .after_help(
            r###"
* <infiles> are paths to fasta files, .fa.gz is supported
    * infile == stdin means reading from STDIN

* `norf find` writes one FA record per ORF; the header carries a
  bracketed `[Orf: ...]` token that `norf tsv` turns into a table

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("find", sub_matches)) => cmd::find::execute(sub_matches),
        Some(("rc", sub_matches)) => cmd::rc::execute(sub_matches),
        Some(("tsv", sub_matches)) => cmd::tsv::execute(sub_matches),
        _ => unreachable!(),
    }
    .unwrap();

    Ok(())
}
