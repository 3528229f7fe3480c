//! Tests for the item bank repair pipeline

#[cfg(test)]
mod tests {
    use mathmatix_tools::ToolError;
    use mathmatix_tools::itembank::repair::{RepairJob, RepairSummary, repair};

    const INPUT: &str = "\u{feff}ID,Question_Text,Option_A,Option_B,Option_C,Option_D,Correct_Answer,Skill_Standard,Grade_Level,Notes\n\
        1,What is 45724 of 8?,1,2,3,4,A,6.NS.1,7,extra\n\
        1,Duplicate,,,,,,,,\n\
        ,Blank id,,,,,,,,\n\
        Q2,Calculate 2+2,4,5,6,7,A,AP.Calc.1,,\n";

    const EXPECTED: &str = "\"ID\",\"Question_Text\",\"Option_A\",\"Option_B\",\"Option_C\",\"Option_D\",\"Correct_Answer\",\"Skill_Standard\",\"Grade_Level\",\"Difficulty\",\"Discrimination\"\r\n\
        1,\"What is 3/9 of 8?\",\"1\",\"2\",\"3\",\"4\",\"A\",\"6.NS.1\",\"7\",1.4,1.0\r\n\
        \"Q2\",\"Calculate 2+2\",\"4\",\"5\",\"6\",\"7\",\"A\",\"AP.Calc.1\",\"calc-1\",2.8,1.0\r\n";

    // Tests the full repair of a stream, byte for byte
    // Verified by writing LF line endings
    #[test]
    fn test_repair_stream() {
        let mut output = Vec::new();
        let summary = repair(INPUT.as_bytes(), &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), EXPECTED);
        assert_eq!(
            summary,
            RepairSummary {
                rows_read: 4,
                written: 2,
                blank_ids: 1,
                duplicate_ids: 1,
            }
        );
    }

    // Tests IDs beyond 64 bits are still written as bare integers
    // Verified by quoting IDs that overflow
    #[test]
    fn test_repair_long_integer_id() {
        let mut output = Vec::new();
        repair(
            "ID,Question_Text\n12345678901234567890,hi\n0042,zero padded\n".as_bytes(),
            &mut output,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        let rows: Vec<&str> = text.split("\r\n").collect();
        assert!(rows[1].starts_with("12345678901234567890,\"hi\","));
        assert!(rows[2].starts_with("42,\"zero padded\","));
    }

    // Tests a header-only input still writes the output header
    // Verified by skipping the header when there are no rows
    #[test]
    fn test_repair_empty_bank() {
        let mut output = Vec::new();
        let summary = repair("ID,Question_Text\n".as_bytes(), &mut output).unwrap();

        assert_eq!(summary.written, 0);
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("\"ID\",\"Question_Text\""));
        assert_eq!(text.matches("\r\n").count(), 1);
    }

    // Tests the file job creates the output directory and file
    // Verified by writing to the input path
    #[test]
    fn test_repair_job_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bank.csv");
        let output = dir.path().join("fixed/bank.csv");
        std::fs::write(&input, INPUT).unwrap();

        let summary = RepairJob::new(&input, &output).run().unwrap();

        assert_eq!(summary.written, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), EXPECTED);
    }

    // Tests a missing input fails without creating the output
    // Verified by creating the output before reading
    #[test]
    fn test_repair_job_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("fixed.csv");

        let error = RepairJob::new(dir.path().join("absent.csv"), &output)
            .run()
            .unwrap_err();

        assert!(matches!(error, ToolError::FileSystem { .. }));
        assert!(!output.exists());
    }
}
