// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

use fakenews_prep::config::PrepConfig;
use fakenews_prep::error::LoadError;
use fakenews_prep::features::read_training_set;
use fakenews_prep::pipeline::PrepPipeline;
use std::path::Path;

const HEADER: &str = "id,title,text,url,top_img,authors,source,publish_date,movies,images\n";

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

fn names(outlet: &str, reals: usize, fakes: usize) -> String {
    let mut lines: Vec<String> = (1..=reals).map(|i| format!("{}_Real_{}", outlet, i)).collect();
    lines.extend((1..=fakes).map(|i| format!("{}_Fake_{}", outlet, i)));
    lines.join("\n") + "\n"
}

fn long_body() -> String {
    vec!["The people went home to eat and sleep."; 20].join(" ")
}

/// Two outlets laid out like FakeNewsNet, with the two fake BuzzFeed rows
/// from the worked example
fn dataset(dir: &Path) {
    write(dir, "BuzzFeedNews.txt", &names("BuzzFeed", 91, 2));
    write(dir, "PolitiFactNews.txt", &names("PolitiFact", 120, 1));

    write(dir, "BuzzFeedNewsUser.txt", "92\t1\t5\n93\t1\t1\n93\t2\t1\n1\t3\t3\n");
    write(dir, "PolitiFactNewsUser.txt", "121\t4\t1\n");

    write(
        dir,
        "BuzzFeed_fake_news_content.csv",
        &format!(
            "{}Fake_1-Webpage,A B,C D,http://x,,\"Jane,None\",http://x,,,\n\
             Fake_2-Webpage,E,F,http://y,,view all posts,http://y,,,\n",
            HEADER
        ),
    );
    write(
        dir,
        "BuzzFeed_real_news_content.csv",
        &format!("{}Real_1-Webpage,Real news,{},,,\"Ann,Bob\",,,,\n", HEADER, long_body()),
    );
    write(
        dir,
        "PolitiFact_fake_news_content.csv",
        &format!("{}Fake_1-Webpage,Shocking hoax,It is a terrible scandal,,,,,,,\n", HEADER),
    );
    write(dir, "PolitiFact_real_news_content.csv", HEADER);
}

fn config(data: &Path, out: &Path) -> PrepConfig {
    PrepConfig {
        data_dir: data.to_path_buf(),
        training_set_path: out.join("training_set.csv"),
        ..PrepConfig::default()
    }
}

#[test]
fn test_training_set_from_raw_files() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    dataset(data.path());
    let config = config(data.path(), out.path());

    let results = PrepPipeline::new(config.clone()).unwrap().run().unwrap();
    let rows = read_training_set(&config.training_set_path).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(results.counts.fake, 3);
    assert_eq!(results.counts.real, 1);

    // fakes first, BuzzFeed before PolitiFact, file order within a partition
    let labels: Vec<u8> = rows.iter().map(|r| r.is_fake).collect();
    assert_eq!(labels, vec![1, 1, 1, 0]);

    assert_eq!((rows[0].length, rows[0].shares, rows[0].num_authors), (6, 5, 1));
    assert_eq!((rows[1].length, rows[1].shares, rows[1].num_authors), (2, 2, 0));
    assert_eq!(rows[2].shares, 1);
    assert!(rows[2].sentiment_score < 0.0);

    assert!(rows[..3].iter().all(|r| r.readability_score.is_none()));
    assert!(rows[3].readability_score.is_some());
    assert_eq!(rows[3].num_authors, 2);
    assert_eq!(rows[3].shares, 3);

    assert!(config.summary_path().exists());
}

#[test]
fn test_missing_share_count_aborts_run() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    dataset(data.path());
    write(data.path(), "PolitiFactNewsUser.txt", "");

    let err = PrepPipeline::new(config(data.path(), out.path())).unwrap().run().unwrap_err();

    assert!(matches!(err.downcast_ref::<LoadError>(), Some(LoadError::MissingShares { .. })));
    assert!(!out.path().join("training_set.csv").exists());
}

#[test]
fn test_missing_content_file_aborts_run() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    dataset(data.path());
    std::fs::remove_file(data.path().join("PolitiFact_real_news_content.csv")).unwrap();

    let result = PrepPipeline::new(config(data.path(), out.path())).unwrap().run();
    assert!(result.is_err());
}
