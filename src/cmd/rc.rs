use clap::*;
use noodles_fasta as fasta;
use std::collections::HashSet;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("rc")
        .about("Reverse complement a FA file")
        .after_help(
            r###"
* [list.txt] is optional, only RC sequences listed in this file
* IUPAC ambiguity codes are complemented too (R<->Y, K<->M, B<->V, D<->H),
  U becomes A and case is preserved
* Any other byte is an error
* --reverse only reverses the bases, the output is NOT the other strand

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Set the input file to use"),
        )
        .arg(
            Arg::new("list.txt")
                .required(false)
                .index(2)
                .help("One name per line"),
        )
        .arg(
            Arg::new("consistent")
                .long("consistent")
                .short('c')
                .action(ArgAction::SetTrue)
                .help("Keep the name consistent (don't prepend RC_)"),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse")
                .short('r')
                .action(ArgAction::SetTrue)
                .help("Reverse without complementing"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let reader = intspan::reader(args.get_one::<String>("infile").unwrap());
    let mut fa_in = fasta::io::Reader::new(reader);

    let is_consistent = args.get_flag("consistent");
    let is_reverse = args.get_flag("reverse");

    let writer = intspan::writer(args.get_one::<String>("outfile").unwrap());
    let mut fa_out = fasta::io::writer::Builder::default()
        .set_line_base_count(usize::MAX)
        .build_from_writer(writer);

    let mut set_list: HashSet<String> = HashSet::new();
    if args.contains_id("list.txt") {
        set_list = intspan::read_first_column(args.get_one::<String>("list.txt").unwrap())
            .into_iter()
            .collect();
    }

    for result in fa_in.records() {
        // obtain record or fail with error
        let record = result?;
        let mut name = String::from_utf8(record.name().into())?;

        if args.contains_id("list.txt") && !set_list.contains(&name) {
            fa_out.write_record(&record)?;
            continue;
        }

        if !is_consistent {
            name = format!("RC_{}", name);
        }

        let seq = &record.sequence()[..];
        let out: Vec<u8> = if is_reverse {
            seq.iter().rev().copied().collect()
        } else {
            norf::rev_comp(seq)?
        };

        let definition = fasta::record::Definition::new(&*name, None);
        let record_rc = fasta::Record::new(definition, fasta::record::Sequence::from(out));
        fa_out.write_record(&record_rc)?;
    }

    Ok(())
}
