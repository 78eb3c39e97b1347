//! Fixture data and the routine that loads it.
//!
//! Seeding wipes every table first, so it can be re-run against the same
//! database. Rows are inserted with explicit ids so fixtures can refer to them.

use sqlx::SqlitePool;

pub struct SeedTopic {
    pub slug: &'static str,
    pub description: &'static str,
}

pub struct SeedUser {
    pub username: &'static str,
    pub name: &'static str,
    pub avatar_url: &'static str,
}

pub struct SeedArticle {
    pub title: &'static str,
    pub topic: &'static str,
    pub author: &'static str,
    pub body: &'static str,
    pub created_at: &'static str,
    pub votes: i64,
    pub article_img_url: &'static str,
}

pub struct SeedComment {
    pub body: &'static str,
    pub article_id: i64,
    pub author: &'static str,
    pub votes: i64,
    pub created_at: &'static str,
}

pub struct SeedData {
    pub topics: Vec<SeedTopic>,
    pub users: Vec<SeedUser>,
    pub articles: Vec<SeedArticle>,
    pub comments: Vec<SeedComment>,
}

pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for table in ["comments", "articles", "users", "topics"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut tx)
            .await?;
    }

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(topic.slug)
            .bind(topic.description)
            .execute(&mut tx)
            .await?;
    }

    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(user.username)
            .bind(user.name)
            .bind(user.avatar_url)
            .execute(&mut tx)
            .await?;
    }

    for (index, article) in data.articles.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO articles (article_id, title, topic, author, body, created_at, votes, article_img_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(index as i64 + 1)
        .bind(article.title)
        .bind(article.topic)
        .bind(article.author)
        .bind(article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .bind(article.article_img_url)
        .execute(&mut tx)
        .await?;
    }

    for (index, comment) in data.comments.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, body, article_id, author, votes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(index as i64 + 1)
        .bind(comment.body)
        .bind(comment.article_id)
        .bind(comment.author)
        .bind(comment.votes)
        .bind(comment.created_at)
        .execute(&mut tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "database seeded"
    );
    Ok(())
}

const IMG: &str = "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

fn article(
    title: &'static str,
    topic: &'static str,
    author: &'static str,
    body: &'static str,
    created_at: &'static str,
    votes: i64,
) -> SeedArticle {
    SeedArticle {
        title,
        topic,
        author,
        body,
        created_at,
        votes,
        article_img_url: IMG,
    }
}

fn comment(
    body: &'static str,
    article_id: i64,
    author: &'static str,
    votes: i64,
    created_at: &'static str,
) -> SeedComment {
    SeedComment {
        body,
        article_id,
        author,
        votes,
        created_at,
    }
}

/// The fixture used by the test suites: 3 topics, 4 users, 13 articles, 18 comments.
pub fn test_data() -> SeedData {
    SeedData {
        topics: vec![
            SeedTopic {
                slug: "mitch",
                description: "The man, the Mitch, the legend",
            },
            SeedTopic {
                slug: "cats",
                description: "Not dogs",
            },
            SeedTopic {
                slug: "paper",
                description: "what books are made of",
            },
        ],
        users: vec![
            SeedUser {
                username: "butter_bridge",
                name: "jonny",
                avatar_url: "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
            },
            SeedUser {
                username: "icellusedkars",
                name: "sam",
                avatar_url: "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
            },
            SeedUser {
                username: "rogersop",
                name: "paul",
                avatar_url: "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
            },
            SeedUser {
                username: "lurker",
                name: "do_nothing",
                avatar_url: "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
            },
        ],
        articles: vec![
            article(
                "Living in the shadow of a great man",
                "mitch",
                "butter_bridge",
                "I find this existence challenging",
                "2020-07-09 20:11:00",
                100,
            ),
            article(
                "Sony Vaio; or, The Laptop",
                "mitch",
                "icellusedkars",
                "Call me Mitchell. Some years ago I thought I would buy a laptop.",
                "2020-10-16 05:03:00",
                0,
            ),
            article(
                "Eight pug gifs that remind me of mitch",
                "mitch",
                "icellusedkars",
                "some gifs",
                "2020-11-03 09:12:00",
                0,
            ),
            article(
                "Student SUES Mitch!",
                "mitch",
                "rogersop",
                "We all love Mitch and his wonderful, unique typing style.",
                "2020-05-06 01:14:00",
                0,
            ),
            article(
                "UNCOVERED: catspiracy to bring down democracy",
                "cats",
                "rogersop",
                "Bastet walks amongst us, and the cats are taking arms!",
                "2020-08-03 13:14:00",
                0,
            ),
            article(
                "A",
                "mitch",
                "icellusedkars",
                "Delicious tin of cat food",
                "2020-10-18 01:00:00",
                0,
            ),
            article(
                "Z",
                "mitch",
                "icellusedkars",
                "I was hungry.",
                "2020-01-07 14:08:00",
                0,
            ),
            article(
                "Does Mitch predate civilisation?",
                "mitch",
                "icellusedkars",
                "Archaeologists have uncovered a gigantic statue from the dawn of humanity.",
                "2020-04-17 01:08:00",
                0,
            ),
            article(
                "They're not exactly dogs, are they?",
                "mitch",
                "butter_bridge",
                "Well? Think about it.",
                "2020-06-06 09:10:00",
                0,
            ),
            article(
                "Seven inspirational thought leaders from Manchester UK",
                "mitch",
                "rogersop",
                "Who are we kidding, there is only one, and it's Mitch!",
                "2020-05-14 04:15:00",
                0,
            ),
            article(
                "Am I a cat?",
                "mitch",
                "icellusedkars",
                "Having run out of ideas for articles, I am staring at the wall blankly.",
                "2020-01-15 22:21:00",
                0,
            ),
            article(
                "Moustache",
                "mitch",
                "butter_bridge",
                "Have you seen the size of that thing?",
                "2020-10-11 11:24:00",
                0,
            ),
            article(
                "Another article about Mitch",
                "mitch",
                "butter_bridge",
                "There will never be enough articles about Mitch!",
                "2020-10-11 11:24:00",
                0,
            ),
        ],
        comments: vec![
            comment(
                "Oh, I've got compassion running out of my nose, pal! I'm the Sultan of Sentiment!",
                9,
                "butter_bridge",
                16,
                "2020-04-06 12:17:00",
            ),
            comment(
                "The beautiful thing about treasure is that it exists. Got to find out what kind of sheets these are; not cotton, not rayon, silky.",
                1,
                "butter_bridge",
                14,
                "2020-10-31 03:03:00",
            ),
            comment(
                "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide, but, uh, call me crazy — onyx would go with anything.",
                1,
                "icellusedkars",
                100,
                "2020-03-01 01:13:00",
            ),
            comment(
                " I carry a log — yes. Is it funny to you? It is not to me.",
                1,
                "icellusedkars",
                -100,
                "2020-02-23 12:01:00",
            ),
            comment("I hate streaming noses", 1, "icellusedkars", 0, "2020-11-03 21:00:00"),
            comment("I hate streaming eyes even more", 1, "icellusedkars", 0, "2020-04-11 21:02:00"),
            comment("Lobster pot", 1, "icellusedkars", 0, "2020-05-15 20:19:00"),
            comment("Delicious crackerbreads", 1, "icellusedkars", 0, "2020-04-14 20:19:00"),
            comment("Superficially charming", 1, "icellusedkars", 0, "2020-01-01 03:08:00"),
            comment("git push origin master", 3, "icellusedkars", 0, "2020-06-20 07:24:00"),
            comment("Ambidextrous marsupial", 3, "icellusedkars", 0, "2020-09-19 23:10:00"),
            comment("Massive intercranial brain haemorrhage", 1, "icellusedkars", 0, "2020-03-02 07:10:00"),
            comment("Fruit pastilles", 1, "icellusedkars", 0, "2020-06-15 10:25:00"),
            comment(
                "What do you see? I have no idea where this will lead us. This place I speak of, is known as the Black Lodge.",
                5,
                "icellusedkars",
                16,
                "2020-06-09 05:00:00",
            ),
            comment(
                "I am 100% sure that we're not completely sure.",
                5,
                "butter_bridge",
                1,
                "2020-11-24 00:08:00",
            ),
            comment("This is a bad article name", 6, "butter_bridge", 1, "2020-10-11 15:23:00"),
            comment("The owls are not what they seem.", 9, "icellusedkars", 20, "2020-03-14 17:02:00"),
            comment(
                "This morning, I showered for nine minutes.",
                1,
                "butter_bridge",
                16,
                "2020-07-21 00:20:00",
            ),
        ],
    }
}
