use clap::*;
use noodles::fasta;
use rayon::prelude::*;
use std::io::Write;

use norf::{OrfFinder, EXTEND_END, EXTEND_START, FRAME_1, FRAME_2, FRAME_3};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("find")
        .about("Locate open reading frames and write them as FA records")
        .after_help(
            r###"
Each located ORF becomes one FA record. The header is the source sequence
name followed by a bracketed token:

    >contig_3 [Orf: id, from, to, strand, incomplete_start, incomplete_end]

* id numbers the ORFs of one source sequence, starting at 0
* from/to are offsets on the strand the ORF was found on; minus-strand
  coordinates refer to the reverse complement
* strand is 1 (forward) or 2 (reverse), the flags are 0|1
* `norf tsv` converts these headers into a table

Lengths are codon counts. An ORF bounded by a stop codon does not include
the stop codon; an ORF cut off by the sequence boundary is flagged
incomplete on that side.

Sequences shorter than 3 bases, or containing bytes outside the IUPAC
alphabet, are skipped with a warning.

Examples:
1. All six frames, ORFs of more than 30 codons:
   norf find input.fa

2. Forward strand only, no lower bound:
   norf find input.fa --min-len 0 --reverse-frames 0

3. Longest stop-to-stop regions with multiple start codons:
   norf find input.fa --extend-start

4. Use 4 threads:
   norf find input.fa --parallel 4

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FA file(s) to process"),
        )
        .arg(
            Arg::new("minlen")
                .long("min-len")
                .num_args(1)
                .default_value("30")
                .value_parser(value_parser!(usize))
                .help("Keep ORFs of more than this many codons"),
        )
        .arg(
            Arg::new("maxlen")
                .long("max-len")
                .num_args(1)
                .default_value("32734")
                .value_parser(value_parser!(usize))
                .help("Keep ORFs of at most this many codons"),
        )
        .arg(
            Arg::new("maxgaps")
                .long("max-gaps")
                .num_args(1)
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Keep ORFs with at most this many codons containing N or other ambiguity codes"),
        )
        .arg(
            Arg::new("forward")
                .long("forward-frames")
                .num_args(1)
                .default_value("1,2,3")
                .help("Frames to scan on the forward strand; 0 or an empty list disables it"),
        )
        .arg(
            Arg::new("reverse")
                .long("reverse-frames")
                .num_args(1)
                .default_value("1,2,3")
                .help("Frames to scan on the reverse complement; 0 or an empty list disables it"),
        )
        .arg(
            Arg::new("extendstart")
                .long("extend-start")
                .action(ArgAction::SetTrue)
                .help("Open ORFs on the earliest start codon after a stop, spanning later starts"),
        )
        .arg(
            Arg::new("extendend")
                .long("extend-end")
                .action(ArgAction::SetTrue)
                .help("Scan past stop codons while the ORF is still under --min-len"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Number of threads for parallel processing"),
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
    //----------------------------
    // Args
    //----------------------------
    let opt_min_len = *args.get_one::<usize>("minlen").unwrap();
    let opt_max_len = *args.get_one::<usize>("maxlen").unwrap();
    let opt_max_gaps = *args.get_one::<usize>("maxgaps").unwrap();
    let opt_parallel = *args.get_one::<usize>("parallel").unwrap();

    let mask_forward = parse_frames(args.get_one::<String>("forward").unwrap())?;
    let mask_reverse = parse_frames(args.get_one::<String>("reverse").unwrap())?;

    let mut extend_mode = 0u32;
    if args.get_flag("extendstart") {
        extend_mode |= EXTEND_START;
    }
    if args.get_flag("extendend") {
        extend_mode |= EXTEND_END;
    }

    //----------------------------
    // Ops
    //----------------------------
    // Load all records up front; workers scan whole sequences independently
    let mut records = Vec::new();
    for infile in args.get_many::<String>("infiles").unwrap() {
        let reader = intspan::reader(infile);
        let mut fa_in = fasta::io::Reader::new(reader);

        for result in fa_in.records() {
            // obtain record or fail with error
            let record = result?;
            let name = String::from_utf8(record.name().into())?;
            let seq = record.sequence()[..].to_vec();
            records.push((name, seq));
        }
    }

    // Create a channel for sending results to the writer thread
    let (sender, receiver) = crossbeam::channel::bounded::<String>(256);

    // Spawn a writer thread
    let output = args.get_one::<String>("outfile").unwrap().to_string();
    let writer_thread = std::thread::spawn(move || {
        let mut writer = intspan::writer(&output);
        for block in receiver {
            writer.write_all(block.as_bytes()).unwrap();
        }
    });

    // Set the number of threads for rayon
    rayon::ThreadPoolBuilder::new()
        .num_threads(opt_parallel)
        .build_global()?;

    records.par_iter().for_each(|(name, seq)| {
        // the finder is single-threaded; every task gets its own
        let mut finder = OrfFinder::new();
        if !finder.set(seq) {
            eprintln!(
                "{}: sequence shorter than one codon or not IUPAC, skipped",
                name
            );
            return;
        }

        let located = finder.find_all(
            opt_min_len,
            opt_max_len,
            opt_max_gaps,
            mask_forward,
            mask_reverse,
            extend_mode,
        );

        let mut block = String::new();
        for (serial, mut el) in located.into_iter().enumerate() {
            el.id = serial as u32;
            let bases = finder.view(&el);
            block.push_str(&format!(
                ">{} {}\n{}\n",
                name,
                el,
                String::from_utf8(bases).unwrap()
            ));
        }
        if !block.is_empty() {
            sender.send(block).unwrap();
        }
    });

    // Drop the sender to signal the writer thread to exit
    drop(sender);
    // Wait for the writer thread to finish
    writer_thread.join().unwrap();

    Ok(())
}

fn parse_frames(list: &str) -> anyhow::Result<u32> {
    let mut mask = 0u32;
    for part in list.split(',') {
        match part.trim() {
            "" | "0" => {}
            "1" => mask |= FRAME_1,
            "2" => mask |= FRAME_2,
            "3" => mask |= FRAME_3,
            other => anyhow::bail!("invalid frame {:?}, expected 1, 2 or 3", other),
        }
    }

    Ok(mask)
}
