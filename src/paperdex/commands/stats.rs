use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::PaperSet;
use crate::stats::archive_stats;

pub fn run(set: &PaperSet) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(archive_stats(set.papers())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paper;

    #[test]
    fn reports_counts() {
        let papers: Vec<Paper> = serde_json::from_str(
            r#"[{"id": "1", "title": "A", "authors": ["X"], "keywords": ["k1", "k2"]},
                {"id": "2", "title": "B", "authors": ["X", "Y"], "keywords": ["K1"]}]"#,
        )
        .unwrap();
        let set = PaperSet::from_papers(papers);
        let result = run(&set).unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats.papers, 2);
        assert_eq!(stats.authors, 2);
        assert_eq!(stats.fields, 2);
    }
}
