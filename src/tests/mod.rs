mod random_play;
